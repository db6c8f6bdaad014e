// src/api/places.rs

use super::models::{NewPlaceDeparture, PlaceDeparture};
use super::{encode_segment, ApiClient, ApiResult};

pub fn list_places(api: &ApiClient) -> ApiResult<Vec<String>> {
    api.get_json("/places/list")
}

pub fn list_departures(api: &ApiClient) -> ApiResult<Vec<PlaceDeparture>> {
    api.get_json("/place_departures")
}

pub fn create_departure(
    api: &ApiClient,
    departure: &NewPlaceDeparture,
) -> ApiResult<PlaceDeparture> {
    api.post_json("/place_departures", departure)
}

pub fn update_departure(
    api: &ApiClient,
    departure_id: i64,
    departure: &NewPlaceDeparture,
) -> ApiResult<PlaceDeparture> {
    api.put_json(&format!("/place_departures/{departure_id}"), departure)
}

pub fn delete_departure(api: &ApiClient, departure_id: i64) -> ApiResult<()> {
    api.delete(&format!("/place_departures/{departure_id}"))
}

/// Unlike route search, a 404 here IS an error the user sees
/// ("no departures found from this location"). Deliberate asymmetry.
pub fn departures_for(api: &ApiClient, place: &str) -> ApiResult<Vec<PlaceDeparture>> {
    api.get_json(&format!("/place_departures/{}", encode_segment(place)))
}

/// Admin-triggered bulk overwrite of the departure table from buses/timings.
pub fn sync_departures(api: &ApiClient) -> ApiResult<()> {
    api.post_empty("/place_departures/sync")
}
