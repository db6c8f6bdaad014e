// src/gui/sections/buses.rs
//
// Admin bus management. The only client-side rule is that a route must
// start and end at different stops; everything else is the backend's call.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::config::consts::BUS_TYPES;
use crate::config::options::SectionKind;
use crate::config::state::BusForm;
use crate::gui::{actions, app::App};
use crate::text::capitalize;

use super::Section;

pub struct BusesSection;
pub static SECTION: BusesSection = BusesSection;

impl Section for BusesSection {
    fn label(&self) -> &'static str {
        "Buses"
    }

    fn kind(&self) -> SectionKind {
        SectionKind::Buses
    }

    fn admin_only(&self) -> bool {
        true
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Buses");
        ui.add_space(4.0);

        {
            let gui = &mut app.state.gui;
            egui::Grid::new("bus_form").num_columns(2).show(ui, |ui| {
                ui.label("Bus no");
                ui.text_edit_singleline(&mut gui.bus_form.bus_no);
                ui.end_row();

                ui.label("Type");
                egui::ComboBox::from_id_salt("bus_type")
                    .selected_text(if gui.bus_form.bus_type.is_empty() {
                        "pick one"
                    } else {
                        gui.bus_form.bus_type.as_str()
                    })
                    .show_ui(ui, |ui| {
                        for ty in BUS_TYPES {
                            ui.selectable_value(&mut gui.bus_form.bus_type, s!(*ty), *ty);
                        }
                    });
                ui.end_row();

                ui.label("From");
                ui.text_edit_singleline(&mut gui.bus_form.start_bus);
                ui.end_row();

                ui.label("To");
                ui.text_edit_singleline(&mut gui.bus_form.end_bus);
                ui.end_row();
            });
        }

        ui.horizontal(|ui| {
            let editing = app.state.gui.bus_form.editing.is_some();
            if ui
                .button(if editing { "Update bus" } else { "Add bus" })
                .clicked()
            {
                actions::save_bus(app);
            }
            if ui.button("Clear").clicked() {
                app.state.gui.bus_form = BusForm::default();
            }
            if ui.button("Refresh").clicked() {
                actions::refresh_buses(app);
            }
        });

        ui.separator();

        let buses = app.catalog.buses().to_vec();
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(60.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::remainder())
            .column(Column::remainder())
            .column(Column::auto().at_least(110.0))
            .header(22.0, |mut header| {
                for h in ["Bus no", "Type", "From", "To", ""] {
                    header.col(|ui| {
                        ui.strong(h);
                    });
                }
            })
            .body(|mut body| {
                for bus in &buses {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label(&bus.bus_no);
                        });
                        row.col(|ui| {
                            ui.label(capitalize(&bus.bus_type));
                        });
                        row.col(|ui| {
                            ui.label(capitalize(&bus.start_bus));
                        });
                        row.col(|ui| {
                            ui.label(capitalize(&bus.end_bus));
                        });
                        row.col(|ui| {
                            ui.horizontal(|ui| {
                                if ui.button("Edit").clicked() {
                                    app.state.gui.bus_form = BusForm {
                                        bus_no: bus.bus_no.clone(),
                                        bus_type: bus.bus_type.clone(),
                                        start_bus: bus.start_bus.clone(),
                                        end_bus: bus.end_bus.clone(),
                                        editing: Some(bus.bus_id),
                                    };
                                }
                                if ui.button("Delete").clicked() {
                                    actions::delete_bus(app, bus.bus_id);
                                }
                            });
                        });
                    });
                }
            });
    }
}
