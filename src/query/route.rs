// src/query/route.rs

use crate::api::models::RouteBus;
use crate::config::consts::HIGHLIGHT_COUNT;

use super::clock::is_future;

/// One trip time left after filtering, plus its presentation flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingSlot {
    pub time: String,
    pub highlighted: bool,
}

/// A bus that still has at least one departure ahead of `now`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub bus_no: String,
    pub bus_type: String,
    pub slots: Vec<TimingSlot>,
}

/// Narrow a raw route-search result to what is worth showing: per bus, keep
/// only times strictly later than `now`, drop buses with nothing left, and
/// flag the first two survivors per bus as soonest-departing. Times keep the
/// backend's order; no re-sort happens here, so the "first two" are earliest
/// only because the backend returns ascending times.
pub fn plan(buses: &[RouteBus], now: &str) -> Vec<RouteMatch> {
    let mut out = Vec::new();
    for bus in buses {
        let slots: Vec<TimingSlot> = bus
            .timings
            .iter()
            .filter(|t| is_future(t, now))
            .enumerate()
            .map(|(i, t)| TimingSlot {
                time: t.clone(),
                highlighted: i < HIGHLIGHT_COUNT,
            })
            .collect();
        if slots.is_empty() {
            continue;
        }
        out.push(RouteMatch {
            bus_no: bus.bus_no.clone(),
            bus_type: bus.bus_type.clone(),
            slots,
        });
    }
    out
}
