// src/gui/sections/timings.rs
//
// Admin timetable editing: pick a bus, see its trip times, add more.
// Times are entered as 24h "HH:MM" and shown as 12h badges.

use eframe::egui::{self, RichText};

use crate::config::options::SectionKind;
use crate::gui::{actions, app::App};
use crate::text::{capitalize, format_time_12h};

use super::Section;

pub struct TimingsSection;
pub static SECTION: TimingsSection = TimingsSection;

impl Section for TimingsSection {
    fn label(&self) -> &'static str {
        "Timings"
    }

    fn kind(&self) -> SectionKind {
        SectionKind::Timings
    }

    fn admin_only(&self) -> bool {
        true
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Trip timings");
        ui.add_space(4.0);

        let buses = app.catalog.buses().to_vec();
        let prev_bus = app.state.gui.timing_form.bus_id;

        ui.horizontal(|ui| {
            let gui = &mut app.state.gui;
            let selected_label = gui
                .timing_form
                .bus_id
                .and_then(|id| buses.iter().find(|b| b.bus_id == id))
                .map(|b| {
                    format!(
                        "Bus {} · {} → {}",
                        b.bus_no,
                        capitalize(&b.start_bus),
                        capitalize(&b.end_bus)
                    )
                })
                .unwrap_or_else(|| s!("pick a bus"));

            egui::ComboBox::from_id_salt("timing_bus")
                .selected_text(selected_label)
                .show_ui(ui, |ui| {
                    for b in &buses {
                        ui.selectable_value(
                            &mut gui.timing_form.bus_id,
                            Some(b.bus_id),
                            format!(
                                "Bus {} · {} → {}",
                                b.bus_no,
                                capitalize(&b.start_bus),
                                capitalize(&b.end_bus)
                            ),
                        );
                    }
                });

            if ui.button("Refresh buses").clicked() {
                actions::refresh_buses(app);
            }
        });

        if app.state.gui.timing_form.bus_id != prev_bus {
            actions::load_timings(app);
        }

        ui.separator();

        if app.state.gui.timing_form.bus_id.is_none() {
            ui.label("Pick a bus to see its timetable.");
            return;
        }

        if app.bus_timings.is_empty() {
            ui.label("No timings recorded for this bus yet.");
        } else {
            ui.horizontal_wrapped(|ui| {
                for t in &app.bus_timings {
                    ui.label(RichText::new(format_time_12h(&t.trip_time)).strong());
                }
            });
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("New time (HH:MM)");
            ui.text_edit_singleline(&mut app.state.gui.timing_form.trip_time);
            if ui.button("Add timing").clicked() {
                actions::add_timing(app);
            }
        });
    }
}
