// src/config/consts.rs

// Backend config
pub const LOCAL_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEPLOYED_BASE_URL: &str = "https://citybus-advisor.onrender.com";

/// Set to any non-empty value to talk to the local backend;
/// set to a full URL to override the base entirely.
pub const BACKEND_ENV: &str = "CITYBUS_BACKEND";

/// Admin credentials come from the environment, never from the binary.
pub const ADMIN_USER_ENV: &str = "CITYBUS_ADMIN_USER";
pub const ADMIN_PASS_ENV: &str = "CITYBUS_ADMIN_PASS";

// Requests
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Query shaping
pub const HIGHLIGHT_COUNT: usize = 2;

// Bus categories offered by the forms; the backend stores free text.
pub const BUS_TYPES: &[&str] = &["ordinary", "express", "deluxe"];
