// src/gui/sections/search.rs
//
// Public route search: source/destination plus optional bus number and
// type filters. Results only ever show times still ahead of the clock.

use eframe::egui::{self, RichText};

use crate::config::consts::BUS_TYPES;
use crate::config::options::SectionKind;
use crate::gui::{actions, app::App, components::time_badges};
use crate::text::capitalize;

use super::Section;

pub struct SearchSection;
pub static SECTION: SearchSection = SearchSection;

impl Section for SearchSection {
    fn label(&self) -> &'static str {
        "Find buses"
    }

    fn kind(&self) -> SectionKind {
        SectionKind::Search
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Route search");
        ui.add_space(4.0);

        {
            let gui = &mut app.state.gui;
            egui::Grid::new("search_form").num_columns(2).show(ui, |ui| {
                ui.label("From");
                ui.text_edit_singleline(&mut gui.search_source);
                ui.end_row();

                ui.label("To");
                ui.text_edit_singleline(&mut gui.search_destination);
                ui.end_row();

                ui.label("Bus no (optional)");
                ui.text_edit_singleline(&mut gui.search_bus_no);
                ui.end_row();

                ui.label("Type (optional)");
                egui::ComboBox::from_id_salt("search_type")
                    .selected_text(if gui.search_bus_type.is_empty() {
                        "any"
                    } else {
                        gui.search_bus_type.as_str()
                    })
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut gui.search_bus_type, s!(), "any");
                        for ty in BUS_TYPES {
                            ui.selectable_value(&mut gui.search_bus_type, s!(*ty), *ty);
                        }
                    });
                ui.end_row();
            });
        }

        if ui.button("Search").clicked() {
            actions::search_routes(app);
        }

        ui.separator();

        if !app.searched {
            return;
        }
        if app.route_results.is_empty() {
            ui.label("No buses found for this route right now.");
            return;
        }

        for m in &app.route_results {
            ui.group(|ui| {
                ui.label(
                    RichText::new(format!("Bus {} · {}", m.bus_no, capitalize(&m.bus_type)))
                        .strong(),
                );
                time_badges::route_slots(ui, &m.slots);
            });
        }
    }
}
