// src/gui/sections/places.rs
//
// Admin management of the place departure table, including the bulk
// rebuild from the bus/timing records.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::config::consts::BUS_TYPES;
use crate::config::options::SectionKind;
use crate::config::state::DepartureForm;
use crate::gui::{actions, app::App};
use crate::text::{capitalize, format_time_12h};

use super::Section;

pub struct PlacesSection;
pub static SECTION: PlacesSection = PlacesSection;

impl Section for PlacesSection {
    fn label(&self) -> &'static str {
        "Places"
    }

    fn kind(&self) -> SectionKind {
        SectionKind::Places
    }

    fn admin_only(&self) -> bool {
        true
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Place departures");
        ui.add_space(4.0);

        {
            let gui = &mut app.state.gui;
            egui::Grid::new("departure_form")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Place");
                    ui.text_edit_singleline(&mut gui.departure_form.place_name);
                    ui.end_row();

                    ui.label("Bus no");
                    ui.text_edit_singleline(&mut gui.departure_form.bus_no);
                    ui.end_row();

                    ui.label("Type");
                    egui::ComboBox::from_id_salt("departure_type")
                        .selected_text(if gui.departure_form.bus_type.is_empty() {
                            "pick one"
                        } else {
                            gui.departure_form.bus_type.as_str()
                        })
                        .show_ui(ui, |ui| {
                            for ty in BUS_TYPES {
                                ui.selectable_value(
                                    &mut gui.departure_form.bus_type,
                                    s!(*ty),
                                    *ty,
                                );
                            }
                        });
                    ui.end_row();

                    ui.label("Time (HH:MM)");
                    ui.text_edit_singleline(&mut gui.departure_form.departure_time);
                    ui.end_row();
                });
        }

        ui.horizontal(|ui| {
            let editing = app.state.gui.departure_form.editing.is_some();
            if ui
                .button(if editing {
                    "Update departure"
                } else {
                    "Add departure"
                })
                .clicked()
            {
                actions::save_departure(app);
            }
            if ui.button("Clear").clicked() {
                app.state.gui.departure_form = DepartureForm::default();
            }
            if ui.button("Refresh").clicked() {
                actions::refresh_departures(app);
            }
            if ui.button("Sync from timetable").clicked() {
                actions::sync_departures(app);
            }
        });

        ui.separator();

        let departures = app.catalog.departures().to_vec();
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::remainder())
            .column(Column::auto().at_least(60.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(110.0))
            .header(22.0, |mut header| {
                for h in ["Place", "Bus no", "Type", "Time", ""] {
                    header.col(|ui| {
                        ui.strong(h);
                    });
                }
            })
            .body(|mut body| {
                for dep in &departures {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label(capitalize(&dep.place_name));
                        });
                        row.col(|ui| {
                            ui.label(&dep.bus_no);
                        });
                        row.col(|ui| {
                            ui.label(capitalize(&dep.bus_type));
                        });
                        row.col(|ui| {
                            ui.label(format_time_12h(&dep.departure_time));
                        });
                        row.col(|ui| {
                            ui.horizontal(|ui| {
                                if ui.button("Edit").clicked() {
                                    app.state.gui.departure_form = DepartureForm {
                                        place_name: dep.place_name.clone(),
                                        bus_no: dep.bus_no.clone(),
                                        bus_type: dep.bus_type.clone(),
                                        departure_time: dep.departure_time.clone(),
                                        editing: Some(dep.departure_id),
                                    };
                                }
                                if ui.button("Delete").clicked() {
                                    actions::delete_departure(app, dep.departure_id);
                                }
                            });
                        });
                    });
                }
            });
    }
}
