// tests/validation.rs
//
// Client-side input rules and the text shaping helpers behind them.
//
use citybus::text::{capitalize, format_time_12h, normalize_name};
use citybus::validate::{check_bus_endpoints, check_trip_time};

#[test]
fn bus_endpoints_must_differ() {
    assert!(check_bus_endpoints("Central", "Airport").is_ok());
    assert!(check_bus_endpoints("Central", "Central").is_err());
}

#[test]
fn endpoint_rule_ignores_case_and_whitespace() {
    assert!(check_bus_endpoints("  central ", "CENTRAL").is_err());
    assert!(check_bus_endpoints("Central", "central market").is_ok());
}

#[test]
fn endpoints_must_be_present() {
    assert!(check_bus_endpoints("", "Airport").is_err());
    assert!(check_bus_endpoints("Central", "   ").is_err());
}

#[test]
fn trip_time_shape() {
    assert!(check_trip_time("00:00").is_ok());
    assert!(check_trip_time("23:59").is_ok());
    assert!(check_trip_time("09:05").is_ok());

    // Everything the lexical ordering depends on is rejected here:
    // missing zero padding, 12h shapes, out-of-range fields.
    assert!(check_trip_time("9:05").is_err());
    assert!(check_trip_time("24:00").is_err());
    assert!(check_trip_time("12:60").is_err());
    assert!(check_trip_time("12.30").is_err());
    assert!(check_trip_time("12:3a").is_err());
    assert!(check_trip_time("").is_err());
}

#[test]
fn names_normalize_to_lower_case() {
    assert_eq!(normalize_name("  Central Market "), "central market");
    assert_eq!(normalize_name("AIRPORT"), "airport");
}

#[test]
fn capitalize_first_letter_only() {
    assert_eq!(capitalize("central market"), "Central market");
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("x"), "X");
}

#[test]
fn twelve_hour_display() {
    assert_eq!(format_time_12h("00:15"), "12:15 AM");
    assert_eq!(format_time_12h("09:05"), "9:05 AM");
    assert_eq!(format_time_12h("12:00"), "12:00 PM");
    assert_eq!(format_time_12h("18:40"), "6:40 PM");
    // Unparseable input passes through untouched.
    assert_eq!(format_time_12h("whenever"), "whenever");
}
