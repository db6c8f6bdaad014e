// tests/departure_board.rs
//
// Place departure board: past times stay visible, classification is
// per time, and the two-soonest highlight is computed per bus.
//
use citybus::api::models::PlaceDeparture;
use citybus::query::departures;

fn dep(id: i64, bus_no: &str, ty: &str, time: &str) -> PlaceDeparture {
    PlaceDeparture {
        departure_id: id,
        place_name: "market".into(),
        bus_no: bus_no.into(),
        bus_type: ty.into(),
        departure_time: time.into(),
    }
}

#[test]
fn keeps_past_departures_on_the_board() {
    let raw = vec![
        dep(1, "5", "ordinary", "07:00"),
        dep(2, "5", "ordinary", "09:00"),
        dep(3, "5", "ordinary", "14:00"),
        dep(4, "5", "ordinary", "20:00"),
    ];
    let board = departures::board(&raw, "10:00");

    assert_eq!(board.len(), 1);
    let slots = &board[0].slots;
    assert_eq!(slots.len(), 4);

    let past: Vec<bool> = slots.iter().map(|s| s.past).collect();
    assert_eq!(past, [true, true, false, false]);

    // Only two futures exist, so both are highlighted.
    let flagged: Vec<&str> = slots
        .iter()
        .filter(|s| s.highlighted)
        .map(|s| s.time.as_str())
        .collect();
    assert_eq!(flagged, ["14:00", "20:00"]);
}

#[test]
fn highlight_is_per_bus_not_global() {
    // Bus 1's futures all come before bus 2's; a global ranking would give
    // all the flags to bus 1.
    let raw = vec![
        dep(1, "1", "ordinary", "11:00"),
        dep(2, "1", "ordinary", "11:30"),
        dep(3, "1", "ordinary", "12:00"),
        dep(4, "2", "express", "15:00"),
        dep(5, "2", "express", "16:00"),
        dep(6, "2", "express", "17:00"),
    ];
    let board = departures::board(&raw, "10:00");

    assert_eq!(board.len(), 2);
    for bus in &board {
        let n = bus.slots.iter().filter(|s| s.highlighted).count();
        assert_eq!(n, 2, "bus {} should flag exactly two", bus.bus_no);
    }
}

#[test]
fn past_times_never_take_a_highlight() {
    let raw = vec![
        dep(1, "3", "deluxe", "06:00"),
        dep(2, "3", "deluxe", "18:00"),
        dep(3, "3", "deluxe", "19:00"),
        dep(4, "3", "deluxe", "20:00"),
    ];
    let board = departures::board(&raw, "12:00");

    let slots = &board[0].slots;
    assert!(!slots[0].highlighted);
    assert!(slots[1].highlighted);
    assert!(slots[2].highlighted);
    assert!(!slots[3].highlighted);
}

#[test]
fn groups_by_bus_number_in_first_seen_order() {
    let raw = vec![
        dep(1, "8", "ordinary", "09:00"),
        dep(2, "4", "express", "09:30"),
        dep(3, "8", "ordinary", "10:00"),
    ];
    let board = departures::board(&raw, "08:00");

    let order: Vec<&str> = board.iter().map(|b| b.bus_no.as_str()).collect();
    assert_eq!(order, ["8", "4"]);
    assert_eq!(board[0].slots.len(), 2);
    assert_eq!(board[1].slots.len(), 1);
    assert_eq!(board[0].bus_type, "ordinary");
}

#[test]
fn all_past_board_has_no_highlights() {
    let raw = vec![
        dep(1, "6", "ordinary", "05:00"),
        dep(2, "6", "ordinary", "06:00"),
    ];
    let board = departures::board(&raw, "23:00");

    assert_eq!(board[0].slots.len(), 2);
    assert!(board[0].slots.iter().all(|s| s.past));
    assert!(board[0].slots.iter().all(|s| !s.highlighted));
}
