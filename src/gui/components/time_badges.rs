// src/gui/components/time_badges.rs
//
// Renders a row of departure-time labels. Shared by the route search
// results and the place departure board so the two sections agree on
// what "soonest" and "already gone" look like.

use eframe::egui::{self, Color32, RichText};

use crate::query::{DepartureSlot, TimingSlot};
use crate::text::format_time_12h;

// Badge green for the soonest departures (#4CAF50).
const SOON: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

pub fn route_slots(ui: &mut egui::Ui, slots: &[TimingSlot]) {
    ui.horizontal_wrapped(|ui| {
        for slot in slots {
            let text = format_time_12h(&slot.time);
            if slot.highlighted {
                ui.label(RichText::new(text).color(SOON).strong());
            } else {
                ui.label(text);
            }
        }
    });
}

pub fn board_slots(ui: &mut egui::Ui, slots: &[DepartureSlot]) {
    ui.horizontal_wrapped(|ui| {
        for slot in slots {
            let text = format_time_12h(&slot.time);
            if slot.past {
                // Past departures stay visible, just dimmed.
                ui.label(RichText::new(text).weak().strikethrough());
            } else if slot.highlighted {
                ui.label(RichText::new(text).color(SOON).strong());
            } else {
                ui.label(text);
            }
        }
    });
}
