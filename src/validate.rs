// src/validate.rs
//
// The one business rule the client enforces before submission; everything
// else (duplicate names, unknown foreign keys) is the backend's to report.

use crate::text::normalize_name;

/// A bus route must actually go somewhere: start and end stop must differ
/// after normalization. Case and surrounding whitespace do not count.
pub fn check_bus_endpoints(start_bus: &str, end_bus: &str) -> Result<(), String> {
    let start = normalize_name(start_bus);
    let end = normalize_name(end_bus);
    if start.is_empty() || end.is_empty() {
        return Err(s!("Both starting point and destination are required"));
    }
    if start == end {
        return Err(s!("Starting point and destination must be different"));
    }
    Ok(())
}

/// "HH:MM", zero-padded 24-hour. The whole time model of the app leans on
/// this shape: lexical order equals chronological order within one day.
pub fn check_trip_time(time: &str) -> Result<(), String> {
    let bytes = time.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit();
    if !well_formed {
        return Err(format!("Invalid time '{time}': expected HH:MM"));
    }
    let hour = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let minute = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
    if hour > 23 || minute > 59 {
        return Err(format!("Invalid time '{time}': out of range"));
    }
    Ok(())
}
