// src/api/buses.rs

use super::models::{Bus, NewBus};
use super::{ApiClient, ApiResult};

pub fn list(api: &ApiClient) -> ApiResult<Vec<Bus>> {
    api.get_json("/buses")
}

pub fn create(api: &ApiClient, bus: &NewBus) -> ApiResult<Bus> {
    api.post_json("/buses", bus)
}

pub fn update(api: &ApiClient, bus_id: i64, bus: &NewBus) -> ApiResult<Bus> {
    api.put_json(&format!("/buses/{bus_id}"), bus)
}

pub fn delete(api: &ApiClient, bus_id: i64) -> ApiResult<()> {
    api.delete(&format!("/buses/{bus_id}"))
}
