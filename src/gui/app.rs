// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    api::ApiClient,
    api::models::TripTiming,
    cache::Catalog,
    config::{options::SectionKind, state::AppState},
    query::{BusBoard, RouteMatch},
    session::{EnvCredentials, SessionGate},
};

use super::{actions, components, router, sections::Section};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let session = SessionGate::new(Box::new(EnvCredentials::from_env()));
    let state = AppState::new(session);
    let api = ApiClient::new(state.options.backend.base_url())?;

    eframe::run_native(
        "CityBus Advisor",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state, api)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub api: ApiClient,

    // last-fetched backend lists, overwritten on every successful fetch
    pub catalog: Catalog,

    // processed results for the two lookup sections
    pub route_results: Vec<RouteMatch>,
    pub searched: bool,
    pub board: Vec<BusBoard>,
    pub board_place: Option<String>,

    // timings currently shown for the bus picked in the Timings section
    pub bus_timings: Vec<TripTiming>,

    // status line + in-flight marker (one handler at a time)
    pub status: Arc<Mutex<String>>,
    pub busy: bool,
}

impl App {
    pub fn new(state: AppState, api: ApiClient) -> Self {
        logf!("Init: backend={}", api.base());

        let mut app = Self {
            state,
            api,
            catalog: Catalog::new(),
            route_results: Vec::new(),
            searched: false,
            board: Vec::new(),
            board_place: None,
            bus_timings: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            busy: false,
        };

        // Warm the pick lists; a dead backend is reported, not fatal.
        actions::refresh_stops(&mut app);
        actions::refresh_places(&mut app);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize {
        self.state.gui.current_section_index
    }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) {
        self.state.gui.current_section_index = idx;
    }

    #[inline]
    pub fn current_section_kind(&self) -> SectionKind {
        router::all_sections()[self.current_index()].kind()
    }

    #[inline]
    pub fn current_section(&self) -> &'static dyn Section {
        router::all_sections()[self.current_index()]
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.state.session.is_admin()
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            components::nav::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let section = self.current_section();
            section.draw(ui, self);
        });

        components::login::draw(ctx, self);
    }
}
