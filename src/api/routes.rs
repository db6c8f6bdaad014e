// src/api/routes.rs

use super::models::RouteBus;
use super::{ApiClient, ApiError, ApiResult};

/// Route search. An unknown stop pair comes back as 404 from the backend;
/// for the caller that is an ordinary empty result, never an error.
pub fn search(
    api: &ApiClient,
    source: &str,
    destination: &str,
    bus_no: Option<&str>,
    bus_type: Option<&str>,
) -> ApiResult<Vec<RouteBus>> {
    let mut query: Vec<(&str, &str)> = vec![("source", source), ("destination", destination)];
    if let Some(no) = bus_no {
        query.push(("bus_no", no));
    }
    if let Some(ty) = bus_type {
        query.push(("bus_type", ty));
    }

    match api.get_json_q("/routes/buses/timings", &query) {
        Err(ApiError::NotFound) => Ok(Vec::new()),
        other => other,
    }
}
