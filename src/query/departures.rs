// src/query/departures.rs

use crate::api::models::PlaceDeparture;
use crate::config::consts::HIGHLIGHT_COUNT;

use super::clock::is_future;

/// One departure time with its classification. Past times stay on the
/// board, just marked; they are never dropped the way route search drops them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureSlot {
    pub time: String,
    pub past: bool,
    pub highlighted: bool,
}

/// All departures of one bus from the looked-up place, in backend order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusBoard {
    pub bus_no: String,
    pub bus_type: String,
    pub slots: Vec<DepartureSlot>,
}

/// Build the departure board for one place. Departures are grouped by bus
/// number in first-seen order; every time is kept and classified against
/// `now`, and within each bus's own future times the first two are flagged
/// highlighted. The two-soonest rule is per bus, never a ranking across buses.
pub fn board(departures: &[PlaceDeparture], now: &str) -> Vec<BusBoard> {
    let mut out: Vec<BusBoard> = Vec::new();
    for dep in departures {
        let slot = DepartureSlot {
            time: dep.departure_time.clone(),
            past: !is_future(&dep.departure_time, now),
            highlighted: false,
        };
        match out.iter_mut().find(|b| b.bus_no == dep.bus_no) {
            Some(bus) => bus.slots.push(slot),
            None => out.push(BusBoard {
                bus_no: dep.bus_no.clone(),
                bus_type: dep.bus_type.clone(),
                slots: vec![slot],
            }),
        }
    }
    for bus in &mut out {
        let mut flagged = 0;
        for slot in &mut bus.slots {
            if !slot.past && flagged < HIGHLIGHT_COUNT {
                slot.highlighted = true;
                flagged += 1;
            }
        }
    }
    out
}
