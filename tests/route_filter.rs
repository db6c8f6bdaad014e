// tests/route_filter.rs
//
// Route search post-processing: future-only filtering, empty-bus
// dropping, and the two-soonest highlight.
//
use citybus::api::models::RouteBus;
use citybus::query::clock;
use citybus::query::route;

fn bus(no: &str, ty: &str, times: &[&str]) -> RouteBus {
    RouteBus {
        bus_no: no.into(),
        bus_type: ty.into(),
        timings: times.iter().map(|t| t.to_string()).collect(),
    }
}

#[test]
fn keeps_only_future_times() {
    let raw = vec![bus("12A", "express", &["07:00", "12:00", "18:00"])];
    let out = route::plan(&raw, "12:30");

    assert_eq!(out.len(), 1);
    let times: Vec<&str> = out[0].slots.iter().map(|s| s.time.as_str()).collect();
    assert_eq!(times, ["18:00"]);
    // A lone remaining time is still flagged soonest.
    assert!(out[0].slots[0].highlighted);
}

#[test]
fn drops_buses_with_nothing_left() {
    let raw = vec![
        bus("1", "ordinary", &["06:00", "08:00"]),
        bus("2", "express", &["06:30", "21:00"]),
    ];
    let out = route::plan(&raw, "20:00");

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].bus_no, "2");
}

#[test]
fn all_past_is_indistinguishable_from_no_results() {
    let raw = vec![
        bus("1", "ordinary", &["06:00"]),
        bus("2", "express", &["07:15", "08:40"]),
    ];
    let out = route::plan(&raw, "23:00");
    assert!(out.is_empty());

    let none = route::plan(&[], "23:00");
    assert_eq!(out, none);
}

#[test]
fn highlights_first_two_per_bus() {
    let raw = vec![bus("7", "deluxe", &["09:00", "10:00", "11:00", "12:00"])];
    let out = route::plan(&raw, "08:00");

    let flags: Vec<bool> = out[0].slots.iter().map(|s| s.highlighted).collect();
    assert_eq!(flags, [true, true, false, false]);
}

#[test]
fn preserves_backend_order_without_sorting() {
    // Backend order is trusted as-is; plan() must not re-sort.
    let raw = vec![bus("9", "ordinary", &["15:00", "13:00", "14:00"])];
    let out = route::plan(&raw, "12:00");

    let times: Vec<&str> = out[0].slots.iter().map(|s| s.time.as_str()).collect();
    assert_eq!(times, ["15:00", "13:00", "14:00"]);
    // "First two" means first two in that order, not the chronologically
    // earliest two.
    let flags: Vec<bool> = out[0].slots.iter().map(|s| s.highlighted).collect();
    assert_eq!(flags, [true, true, false]);
}

#[test]
fn same_input_same_output() {
    let raw = vec![
        bus("1", "ordinary", &["09:00", "17:00"]),
        bus("2", "express", &["10:30"]),
    ];
    let a = route::plan(&raw, "08:45");
    let b = route::plan(&raw, "08:45");
    assert_eq!(a, b);
}

#[test]
fn midnight_rollover_follows_the_lexical_rule() {
    // Documented limitation of the lexical comparison: it has no day
    // context. A trip at "00:10" tomorrow, 20 minutes away, sorts before a
    // clock of "23:50" and is dropped as past; conversely a "23:50"
    // departure that left 20 minutes ago still sorts after "00:10" and
    // stays on the list.
    assert!(!clock::is_future("00:10", "23:50"));
    assert!(clock::is_future("23:50", "00:10"));

    let missed = route::plan(&[bus("N1", "express", &["00:10"])], "23:50");
    assert!(missed.is_empty());

    let ghost = route::plan(&[bus("N1", "express", &["23:50"])], "00:10");
    assert_eq!(ghost.len(), 1);
    assert!(ghost[0].slots[0].highlighted);
}

#[test]
fn boundary_time_is_not_future() {
    // Strictly later: a trip at exactly "now" is already gone.
    assert!(!clock::is_future("12:00", "12:00"));
    assert!(clock::is_future("12:01", "12:00"));
}
