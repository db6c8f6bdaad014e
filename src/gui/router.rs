// src/gui/router.rs
use super::sections::{self, Section};

pub static SECTIONS: &[&'static dyn Section] = &[
    &sections::search::SECTION,
    &sections::departures::SECTION,
    &sections::buses::SECTION,
    &sections::stops::SECTION,
    &sections::timings::SECTION,
    &sections::places::SECTION,
];

pub fn all_sections() -> &'static [&'static dyn Section] {
    SECTIONS
}
