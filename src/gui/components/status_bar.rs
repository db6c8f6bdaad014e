// src/gui/components/status_bar.rs

use eframe::egui::{self, Align, Layout};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.horizontal(|ui| {
        if app.busy {
            ui.spinner();
        }
        ui.label(app.status.lock().unwrap().clone());

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.weak(app.api.base());
        });
    });
}
