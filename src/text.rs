// src/text.rs
//
// Small text shaping helpers shared by GUI, CLI and validation.

/// Stop and place names are stored lower case; compare and submit this form.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Capitalize the first letter for display ("central market" → "Central market").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => s!(),
    }
}

/// "HH:MM" (24h) → "H:MM AM/PM" for timing badges.
/// Falls back to the input unchanged if it isn't a parseable time.
pub fn format_time_12h(time: &str) -> String {
    let Some((h, m)) = time.split_once(':') else {
        return s!(time);
    };
    let Ok(hour) = h.parse::<u32>() else {
        return s!(time);
    };
    let ampm = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        other => other,
    };
    format!("{display_hour}:{m} {ampm}")
}
