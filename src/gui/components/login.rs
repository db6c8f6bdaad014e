// src/gui/components/login.rs
//
// Modal login window. Rejection is a status-line message and a cleared
// password field; there is no lockout and no attempt counter.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    if !app.state.gui.login_open {
        return;
    }

    let mut open = true;
    let mut submit = false;

    egui::Window::new("Admin login")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            egui::Grid::new("login_grid").num_columns(2).show(ui, |ui| {
                ui.label("Username");
                ui.text_edit_singleline(&mut app.state.gui.login_username);
                ui.end_row();

                ui.label("Password");
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut app.state.gui.login_password)
                        .password(true),
                );
                if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                ui.end_row();
            });

            ui.horizontal(|ui| {
                if ui.button("Log in").clicked() {
                    submit = true;
                }
                if ui.button("Cancel").clicked() {
                    app.state.gui.login_open = false;
                }
            });
        });

    if !open {
        app.state.gui.login_open = false;
    }
    if submit {
        actions::login(app);
    }
}
