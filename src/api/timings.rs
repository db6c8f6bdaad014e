// src/api/timings.rs

use super::models::{NewTiming, TripTiming};
use super::{ApiClient, ApiError, ApiResult};

/// The backend takes a batch; the GUI usually sends one at a time.
pub fn add(api: &ApiClient, timings: &[NewTiming]) -> ApiResult<()> {
    api.post_json::<_, serde_json::Value>("/bus_timings", timings)
        .map(|_| ())
}

/// 404 here means "no timings recorded yet", not an error.
pub fn for_bus(api: &ApiClient, bus_id: i64) -> ApiResult<Vec<TripTiming>> {
    match api.get_json(&format!("/bus_timings/{bus_id}")) {
        Err(ApiError::NotFound) => Ok(Vec::new()),
        other => other,
    }
}
