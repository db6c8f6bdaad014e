// src/api/stops.rs
//
// Stop mutations are where the backend reports duplicate names etc. via the
// `detail` field; nothing to special-case here, the error mapping carries it.

use super::models::{NewStop, Stop};
use super::{ApiClient, ApiResult};

pub fn list(api: &ApiClient) -> ApiResult<Vec<Stop>> {
    api.get_json("/stops")
}

pub fn create(api: &ApiClient, stop: &NewStop) -> ApiResult<Stop> {
    api.post_json("/stops", stop)
}

pub fn update(api: &ApiClient, stop_id: i64, stop: &NewStop) -> ApiResult<Stop> {
    api.put_json(&format!("/stops/{stop_id}"), stop)
}

pub fn delete(api: &ApiClient, stop_id: i64) -> ApiResult<()> {
    api.delete(&format!("/stops/{stop_id}"))
}
