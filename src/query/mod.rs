// src/query/mod.rs
//
// Pure post-processing of backend results. No I/O here; the GUI and CLI
// feed in fetched data plus a clock reading and render what comes back.

pub mod clock;
pub mod departures;
pub mod route;

pub use departures::{BusBoard, DepartureSlot};
pub use route::{RouteMatch, TimingSlot};
