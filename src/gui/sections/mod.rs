// src/gui/sections/mod.rs
use eframe::egui;

use crate::config::options::SectionKind;

use super::app::App;

pub mod buses;
pub mod departures;
pub mod places;
pub mod search;
pub mod stops;
pub mod timings;

/// One tab of the client. Sections are stateless; everything they show
/// lives in App, everything they change goes through gui::actions.
pub trait Section: Send + Sync + 'static {
    fn label(&self) -> &'static str;
    fn kind(&self) -> SectionKind;

    /// Admin-only sections are refused by the navigation bar unless the
    /// session gate says admin.
    fn admin_only(&self) -> bool {
        false
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
