// src/config/options.rs
use std::env;

use super::consts::{BACKEND_ENV, DEPLOYED_BASE_URL, LOCAL_BASE_URL};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Backend {
    Local,
    Deployed,
    Custom(String),
}

impl Backend {
    /// Pick the backend from the environment. Unset means the deployed
    /// instance; any non-URL value means local development.
    pub fn from_env() -> Self {
        match env::var(BACKEND_ENV) {
            Ok(v) if v.starts_with("http://") || v.starts_with("https://") => {
                Backend::Custom(v)
            }
            Ok(v) if !v.trim().is_empty() => Backend::Local,
            _ => Backend::Deployed,
        }
    }

    pub fn base_url(&self) -> &str {
        match self {
            Backend::Local => LOCAL_BASE_URL,
            Backend::Deployed => DEPLOYED_BASE_URL,
            Backend::Custom(url) => url,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Search,
    Departures,
    Buses,
    Stops,
    Timings,
    Places,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub backend: Backend,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            backend: Backend::from_env(),
        }
    }
}
