// src/gui/sections/departures.rs
//
// Public departure board for one place. Past departures are kept on the
// board and dimmed; the two soonest per bus are flagged.

use eframe::egui::{self, RichText};

use crate::config::options::SectionKind;
use crate::gui::{actions, app::App, components::time_badges};
use crate::text::capitalize;

use super::Section;

pub struct DeparturesSection;
pub static SECTION: DeparturesSection = DeparturesSection;

impl Section for DeparturesSection {
    fn label(&self) -> &'static str {
        "Departures"
    }

    fn kind(&self) -> SectionKind {
        SectionKind::Departures
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Departures by place");
        ui.add_space(4.0);

        let places = app.catalog.places().to_vec();

        ui.horizontal(|ui| {
            let gui = &mut app.state.gui;
            egui::ComboBox::from_id_salt("lookup_place")
                .selected_text(if gui.lookup_place.is_empty() {
                    s!("pick a place")
                } else {
                    capitalize(&gui.lookup_place)
                })
                .show_ui(ui, |ui| {
                    for place in &places {
                        ui.selectable_value(
                            &mut gui.lookup_place,
                            place.clone(),
                            capitalize(place),
                        );
                    }
                });

            if ui.button("Show departures").clicked() {
                actions::lookup_departures(app);
            }
            if ui.button("Refresh places").clicked() {
                actions::refresh_places(app);
            }
        });

        ui.separator();

        let Some(place) = app.board_place.clone() else {
            return;
        };
        ui.label(RichText::new(format!("Departing from {}", capitalize(&place))).strong());
        ui.add_space(4.0);

        for bus in &app.board {
            ui.group(|ui| {
                ui.label(
                    RichText::new(format!("Bus {} · {}", bus.bus_no, capitalize(&bus.bus_type)))
                        .strong(),
                );
                time_badges::board_slots(ui, &bus.slots);
            });
        }
    }
}
