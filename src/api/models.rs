// src/api/models.rs
//
// Wire mirror of the backend rows. Identifiers are assigned by the backend;
// the `New*` shapes are the same records minus their ids.
// All times are zero-padded 24-hour "HH:MM" strings, no date, no timezone.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bus {
    pub bus_id: i64,
    pub bus_no: String,
    pub bus_type: String,
    pub start_bus: String,
    pub end_bus: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewBus {
    pub bus_no: String,
    pub bus_type: String,
    pub start_bus: String,
    pub end_bus: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub stop_id: i64,
    pub stop_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewStop {
    pub stop_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripTiming {
    pub timing_id: i64,
    pub bus_id: i64,
    pub trip_time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTiming {
    pub bus_id: i64,
    pub trip_time: String,
}

/// One row of a route search response: a bus serving the requested
/// source → destination pair with its full timing list, in backend order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteBus {
    pub bus_no: String,
    pub bus_type: String,
    pub timings: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceDeparture {
    pub departure_id: i64,
    pub place_name: String,
    pub bus_no: String,
    pub bus_type: String,
    pub departure_time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewPlaceDeparture {
    pub place_name: String,
    pub bus_no: String,
    pub bus_type: String,
    pub departure_time: String,
}
