// src/config/state.rs
use super::options::AppOptions;
use crate::session::SessionGate;

/// Per-form edit buffers. `editing` holds the backend id while an existing
/// record is loaded into the form; `None` means the form creates.
#[derive(Clone, Debug, Default)]
pub struct BusForm {
    pub bus_no: String,
    pub bus_type: String,
    pub start_bus: String,
    pub end_bus: String,
    pub editing: Option<i64>,
}

#[derive(Clone, Debug, Default)]
pub struct StopForm {
    pub stop_name: String,
    pub editing: Option<i64>,
}

#[derive(Clone, Debug, Default)]
pub struct TimingForm {
    pub bus_id: Option<i64>,
    pub trip_time: String,
}

#[derive(Clone, Debug, Default)]
pub struct DepartureForm {
    pub place_name: String,
    pub bus_no: String,
    pub bus_type: String,
    pub departure_time: String,
    pub editing: Option<i64>,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into router::SECTIONS
    pub current_section_index: usize,

    // Route search form
    pub search_source: String,
    pub search_destination: String,
    pub search_bus_no: String,
    pub search_bus_type: String,

    // Place departure lookup
    pub lookup_place: String,

    // Admin forms
    pub bus_form: BusForm,
    pub stop_form: StopForm,
    pub timing_form: TimingForm,
    pub departure_form: DepartureForm,

    // Login modal
    pub login_open: bool,
    pub login_username: String,
    pub login_password: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_section_index: 0,
            search_source: s!(),
            search_destination: s!(),
            search_bus_no: s!(),
            search_bus_type: s!(),
            lookup_place: s!(),
            bus_form: BusForm::default(),
            stop_form: StopForm::default(),
            timing_form: TimingForm::default(),
            departure_form: DepartureForm::default(),
            login_open: false,
            login_username: s!(),
            login_password: s!(),
        }
    }
}

/// Single source of truth owned by the top-level controller; no ambient
/// globals, everything is passed by reference to whoever needs it.
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
    pub session: SessionGate,
}

impl AppState {
    pub fn new(session: SessionGate) -> Self {
        Self {
            options: AppOptions::default(),
            gui: GuiState::default(),
            session,
        }
    }
}
