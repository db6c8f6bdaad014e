// src/api/error.rs

/// The two error classes the client distinguishes (plus transport):
/// `NotFound` so search-style callers can decide whether 404 means "empty"
/// (route search) or a real error (place departures), and `Backend` carrying
/// the server's `detail` message verbatim when it sent one.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,

    #[error("{detail}")]
    Backend { status: u16, detail: String },

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    pub fn backend(status: u16, detail: Option<String>) -> Self {
        let detail = match detail {
            Some(msg) if !msg.trim().is_empty() => msg,
            _ => format!("Request failed (HTTP {status})"),
        };
        ApiError::Backend { status, detail }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
