// src/cache.rs
//
// In-memory holder for the last-fetched backend lists. Every successful
// fetch simply overwrites the relevant list; last write wins, no staleness
// tracking. Mutating operations never patch these lists in place, callers
// re-fetch instead.

use crate::api::models::{Bus, PlaceDeparture, Stop};

#[derive(Debug, Default)]
pub struct Catalog {
    buses: Vec<Bus>,
    stops: Vec<Stop>,
    places: Vec<String>,
    departures: Vec<PlaceDeparture>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn places(&self) -> &[String] {
        &self.places
    }

    pub fn departures(&self) -> &[PlaceDeparture] {
        &self.departures
    }

    pub fn set_buses(&mut self, buses: Vec<Bus>) {
        self.buses = buses;
    }

    pub fn set_stops(&mut self, stops: Vec<Stop>) {
        self.stops = stops;
    }

    pub fn set_places(&mut self, places: Vec<String>) {
        self.places = places;
    }

    pub fn set_departures(&mut self, departures: Vec<PlaceDeparture>) {
        self.departures = departures;
    }

    pub fn bus_by_id(&self, bus_id: i64) -> Option<&Bus> {
        self.buses.iter().find(|b| b.bus_id == bus_id)
    }

    pub fn stop_by_id(&self, stop_id: i64) -> Option<&Stop> {
        self.stops.iter().find(|s| s.stop_id == stop_id)
    }
}
