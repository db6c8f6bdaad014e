// src/gui/components/nav.rs
//
// Top navigation: one selectable label per section plus the session
// controls on the right. The admin gate lives here: clicking an
// admin-only tab without an admin session is refused with a warning,
// never silently ignored.

use eframe::egui::{self, Align, Layout};

use crate::gui::{actions, app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let sections = router::all_sections();
        let cur = app.current_index();

        for (idx, section) in sections.iter().enumerate() {
            let selected = idx == cur;

            if ui.selectable_label(selected, section.label()).clicked() && !selected {
                if section.admin_only() && !app.is_admin() {
                    logd!("UI: refused {:?} (not admin)", section.kind());
                    app.status("Admins only: log in first");
                    continue;
                }
                let prev = app.current_section_kind();
                app.set_current_index(idx);
                logf!("UI: Section switch {:?} → {:?}", prev, section.kind());
            }
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if app.is_admin() {
                if ui.button("Log out").clicked() {
                    actions::logout(app);
                }
                ui.label("admin");
            } else if ui.button("Admin login").clicked() {
                app.state.gui.login_open = true;
            }
        });
    });
}
