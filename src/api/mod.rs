// src/api/mod.rs
//
// Blocking JSON client for the CityBus Advisor REST backend. One module per
// entity family; this file owns the transport plumbing and error mapping.
// The contract is fixed and owned by the backend — the client never invents
// endpoints or patches responses.

pub mod buses;
mod error;
pub mod models;
pub mod places;
pub mod routes;
pub mod stops;
pub mod timings;

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::consts::REQUEST_TIMEOUT_SECS;

pub use error::{ApiError, ApiResult};

// Bytes that would change the meaning of a path segment if left raw.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Escape a free-text value for use as one URL path segment. Numeric ids
/// never need this; admin-entered names do.
fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

/// FastAPI-style error body: `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

pub struct ApiClient {
    base: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            base: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let resp = self.http.get(self.url(path)).send()?;
        read_json(resp)
    }

    fn get_json_q<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let resp = self.http.get(self.url(path)).query(query).send()?;
        read_json(resp)
    }

    fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.http.post(self.url(path)).json(body).send()?;
        read_json(resp)
    }

    fn post_empty(&self, path: &str) -> ApiResult<()> {
        let resp = self.http.post(self.url(path)).send()?;
        read_ok(resp)
    }

    fn put_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.http.put(self.url(path)).json(body).send()?;
        read_json(resp)
    }

    fn delete(&self, path: &str) -> ApiResult<()> {
        let resp = self.http.delete(self.url(path)).send()?;
        read_ok(resp)
    }
}

fn check_status(resp: Response) -> ApiResult<Response> {
    let status = resp.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }
    if !status.is_success() {
        let detail = resp.json::<ErrorBody>().ok().and_then(|b| b.detail);
        return Err(ApiError::backend(status.as_u16(), detail));
    }
    Ok(resp)
}

fn read_json<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
    Ok(check_status(resp)?.json::<T>()?)
}

fn read_ok(resp: Response) -> ApiResult<()> {
    check_status(resp).map(|_| ())
}
