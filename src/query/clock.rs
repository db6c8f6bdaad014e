// src/query/clock.rs

use chrono::Local;

/// Current wall-clock time-of-day as zero-padded "HH:MM".
pub fn now_hhmm() -> String {
    Local::now().format("%H:%M").to_string()
}

/// Strictly-later test on "HH:MM" strings. Both operands are zero-padded
/// 24-hour times with no date, so lexical order equals chronological order
/// within a single day. Known limitation: with no day context the rule
/// misfires around midnight. A trip at "00:10" tomorrow reads as past
/// against a clock of "23:50", and yesterday's "23:50" departure still
/// reads as upcoming at "00:10". Kept as a documented simplification of a
/// time-of-day-only schedule.
pub fn is_future(time: &str, now: &str) -> bool {
    time > now
}
