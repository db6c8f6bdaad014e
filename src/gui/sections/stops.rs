// src/gui/sections/stops.rs
//
// Admin stop management. Names are normalized to lower case on save and
// capitalized for display; duplicate-name errors come from the backend.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::config::options::SectionKind;
use crate::config::state::StopForm;
use crate::gui::{actions, app::App};
use crate::text::capitalize;

use super::Section;

pub struct StopsSection;
pub static SECTION: StopsSection = StopsSection;

impl Section for StopsSection {
    fn label(&self) -> &'static str {
        "Stops"
    }

    fn kind(&self) -> SectionKind {
        SectionKind::Stops
    }

    fn admin_only(&self) -> bool {
        true
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Stops");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Stop name");
            ui.text_edit_singleline(&mut app.state.gui.stop_form.stop_name);

            let editing = app.state.gui.stop_form.editing.is_some();
            if ui
                .button(if editing { "Update stop" } else { "Add stop" })
                .clicked()
            {
                actions::save_stop(app);
            }
            if ui.button("Clear").clicked() {
                app.state.gui.stop_form = StopForm::default();
            }
            if ui.button("Refresh").clicked() {
                actions::refresh_stops(app);
            }
        });

        ui.separator();

        let stops = app.catalog.stops().to_vec();
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::remainder())
            .column(Column::auto().at_least(110.0))
            .header(22.0, |mut header| {
                for h in ["Stop", ""] {
                    header.col(|ui| {
                        ui.strong(h);
                    });
                }
            })
            .body(|mut body| {
                for stop in &stops {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label(capitalize(&stop.stop_name));
                        });
                        row.col(|ui| {
                            ui.horizontal(|ui| {
                                if ui.button("Edit").clicked() {
                                    app.state.gui.stop_form = StopForm {
                                        stop_name: stop.stop_name.clone(),
                                        editing: Some(stop.stop_id),
                                    };
                                }
                                if ui.button("Delete").clicked() {
                                    actions::delete_stop(app, stop.stop_id);
                                }
                            });
                        });
                    });
                }
            });
    }
}
