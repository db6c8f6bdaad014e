// src/gui/actions.rs
//
// Button "executive" actions for all sections. Layout stays in the section
// files; the operational logic (fetch, validate, submit, re-fetch) lives
// here. Every handler runs to completion on the UI thread with the busy
// marker raised; there is no de-duplication of a re-triggered action.

use crate::api::{self, ApiError};
use crate::api::models::{NewBus, NewPlaceDeparture, NewStop, NewTiming};
use crate::config::state::{BusForm, DepartureForm, StopForm};
use crate::gui::app::App;
use crate::query::{clock, departures, route};
use crate::text::normalize_name;
use crate::validate;

/* ---------- fetches (list refresh) ---------- */

pub fn refresh_buses(app: &mut App) {
    app.busy = true;
    match api::buses::list(&app.api) {
        Ok(buses) => {
            logf!("Fetch: buses={}", buses.len());
            app.catalog.set_buses(buses);
        }
        Err(e) => {
            loge!("Fetch: buses failed: {}", e);
            app.status(format!("Could not load buses: {e}"));
        }
    }
    app.busy = false;
}

pub fn refresh_stops(app: &mut App) {
    app.busy = true;
    match api::stops::list(&app.api) {
        Ok(stops) => {
            logf!("Fetch: stops={}", stops.len());
            app.catalog.set_stops(stops);
        }
        Err(e) => {
            loge!("Fetch: stops failed: {}", e);
            app.status(format!("Could not load stops: {e}"));
        }
    }
    app.busy = false;
}

pub fn refresh_places(app: &mut App) {
    app.busy = true;
    match api::places::list_places(&app.api) {
        Ok(places) => {
            logf!("Fetch: places={}", places.len());
            app.catalog.set_places(places);
        }
        Err(e) => {
            loge!("Fetch: places failed: {}", e);
            app.status(format!("Could not load places: {e}"));
        }
    }
    app.busy = false;
}

pub fn refresh_departures(app: &mut App) {
    app.busy = true;
    match api::places::list_departures(&app.api) {
        Ok(deps) => {
            logf!("Fetch: departures={}", deps.len());
            app.catalog.set_departures(deps);
        }
        Err(e) => {
            loge!("Fetch: departures failed: {}", e);
            app.status(format!("Could not load departures: {e}"));
        }
    }
    app.busy = false;
}

/* ---------- route search ---------- */

pub fn search_routes(app: &mut App) {
    let source = normalize_name(&app.state.gui.search_source);
    let destination = normalize_name(&app.state.gui.search_destination);
    if source.is_empty() || destination.is_empty() {
        app.status("Enter both source and destination");
        return;
    }

    let bus_no = app.state.gui.search_bus_no.trim().to_string();
    let bus_type = app.state.gui.search_bus_type.clone();
    let bus_no = (!bus_no.is_empty()).then_some(bus_no);
    let bus_type = (!bus_type.is_empty()).then_some(bus_type);

    app.busy = true;
    logf!(
        "Search: {} → {} (no={:?}, type={:?})",
        source, destination, bus_no, bus_type
    );

    let result = api::routes::search(
        &app.api,
        &source,
        &destination,
        bus_no.as_deref(),
        bus_type.as_deref(),
    );

    match result {
        Ok(raw) => {
            let now = clock::now_hhmm();
            app.route_results = route::plan(&raw, &now);
            app.searched = true;
            if app.route_results.is_empty() {
                // A non-empty raw result whose times have all passed reads
                // the same as no match at all.
                app.status("No buses found for this route right now");
            } else {
                app.status(format!("{} bus(es) found", app.route_results.len()));
            }
            logf!(
                "Search: raw={}, shown={}",
                raw.len(),
                app.route_results.len()
            );
        }
        Err(e) => {
            loge!("Search: failed: {}", e);
            app.status(format!("Search failed: {e}"));
        }
    }
    app.busy = false;
}

/* ---------- place departure lookup ---------- */

pub fn lookup_departures(app: &mut App) {
    let place = normalize_name(&app.state.gui.lookup_place);
    if place.is_empty() {
        app.status("Pick a place first");
        return;
    }

    app.busy = true;
    logf!("Lookup: place={}", place);

    match api::places::departures_for(&app.api, &place) {
        Ok(raw) => {
            let now = clock::now_hhmm();
            app.board = departures::board(&raw, &now);
            app.board_place = Some(place);
            app.status(format!("{} bus(es) depart from here", app.board.len()));
        }
        Err(ApiError::NotFound) => {
            loge!("Lookup: no departures for {}", place);
            app.board.clear();
            app.board_place = None;
            app.status("No departures found from this location");
        }
        Err(e) => {
            loge!("Lookup: failed: {}", e);
            app.status(format!("Lookup failed: {e}"));
        }
    }
    app.busy = false;
}

/* ---------- bus CRUD ---------- */

pub fn save_bus(app: &mut App) {
    let form = &app.state.gui.bus_form;
    let bus_no = form.bus_no.trim().to_string();
    if bus_no.is_empty() || form.bus_type.is_empty() {
        app.status("Bus number and type are required");
        return;
    }
    if let Err(msg) = validate::check_bus_endpoints(&form.start_bus, &form.end_bus) {
        app.status(msg);
        return;
    }

    let body = NewBus {
        bus_no,
        bus_type: form.bus_type.clone(),
        start_bus: normalize_name(&form.start_bus),
        end_bus: normalize_name(&form.end_bus),
    };
    let editing = form.editing;

    app.busy = true;
    let result = match editing {
        Some(id) => api::buses::update(&app.api, id, &body).map(|_| ()),
        None => api::buses::create(&app.api, &body).map(|_| ()),
    };
    app.busy = false;

    match result {
        Ok(()) => {
            logf!("Bus: saved {} (editing={:?})", body.bus_no, editing);
            app.state.gui.bus_form = BusForm::default();
            app.status(if editing.is_some() {
                "Bus updated"
            } else {
                "Bus added"
            });
            refresh_buses(app);
        }
        Err(e) => {
            loge!("Bus: save failed: {}", e);
            app.status(format!("Could not save bus: {e}"));
        }
    }
}

pub fn delete_bus(app: &mut App, bus_id: i64) {
    app.busy = true;
    let result = api::buses::delete(&app.api, bus_id);
    app.busy = false;

    match result {
        Ok(()) => {
            logf!("Bus: deleted id={}", bus_id);
            if app.state.gui.bus_form.editing == Some(bus_id) {
                app.state.gui.bus_form = BusForm::default();
            }
            if app.state.gui.timing_form.bus_id == Some(bus_id) {
                app.state.gui.timing_form.bus_id = None;
                app.bus_timings.clear();
            }
            app.status("Bus deleted");
            refresh_buses(app);
        }
        Err(e) => {
            loge!("Bus: delete failed id={}: {}", bus_id, e);
            app.status(format!("Could not delete bus: {e}"));
        }
    }
}

/* ---------- stop CRUD ---------- */

pub fn save_stop(app: &mut App) {
    let name = normalize_name(&app.state.gui.stop_form.stop_name);
    if name.is_empty() {
        app.status("Stop name is required");
        return;
    }
    let body = NewStop { stop_name: name };
    let editing = app.state.gui.stop_form.editing;

    app.busy = true;
    let result = match editing {
        Some(id) => api::stops::update(&app.api, id, &body).map(|_| ()),
        None => api::stops::create(&app.api, &body).map(|_| ()),
    };
    app.busy = false;

    match result {
        Ok(()) => {
            logf!("Stop: saved {} (editing={:?})", body.stop_name, editing);
            app.state.gui.stop_form = StopForm::default();
            app.status(if editing.is_some() {
                "Stop updated"
            } else {
                "Stop added"
            });
            refresh_stops(app);
        }
        Err(e) => {
            // Duplicate names and the like arrive here with the backend's
            // own message in `e`.
            loge!("Stop: save failed: {}", e);
            app.status(format!("Could not save stop: {e}"));
        }
    }
}

pub fn delete_stop(app: &mut App, stop_id: i64) {
    app.busy = true;
    let result = api::stops::delete(&app.api, stop_id);
    app.busy = false;

    match result {
        Ok(()) => {
            logf!("Stop: deleted id={}", stop_id);
            if app.state.gui.stop_form.editing == Some(stop_id) {
                app.state.gui.stop_form = StopForm::default();
            }
            app.status("Stop deleted");
            refresh_stops(app);
        }
        Err(e) => {
            loge!("Stop: delete failed id={}: {}", stop_id, e);
            app.status(format!("Could not delete stop: {e}"));
        }
    }
}

/* ---------- trip timings ---------- */

pub fn load_timings(app: &mut App) {
    let Some(bus_id) = app.state.gui.timing_form.bus_id else {
        app.bus_timings.clear();
        return;
    };

    app.busy = true;
    match api::timings::for_bus(&app.api, bus_id) {
        Ok(timings) => {
            logf!("Timings: bus={} count={}", bus_id, timings.len());
            app.bus_timings = timings;
        }
        Err(e) => {
            loge!("Timings: fetch failed bus={}: {}", bus_id, e);
            app.status(format!("Could not load timings: {e}"));
        }
    }
    app.busy = false;
}

pub fn add_timing(app: &mut App) {
    let Some(bus_id) = app.state.gui.timing_form.bus_id else {
        app.status("Pick a bus first");
        return;
    };
    let trip_time = app.state.gui.timing_form.trip_time.trim().to_string();
    if let Err(msg) = validate::check_trip_time(&trip_time) {
        app.status(msg);
        return;
    }

    app.busy = true;
    let result = api::timings::add(&app.api, &[NewTiming { bus_id, trip_time }]);
    app.busy = false;

    match result {
        Ok(()) => {
            logf!("Timings: added for bus={}", bus_id);
            app.state.gui.timing_form.trip_time.clear();
            app.status("Timing added");
            load_timings(app);
        }
        Err(e) => {
            loge!("Timings: add failed bus={}: {}", bus_id, e);
            app.status(format!("Could not add timing: {e}"));
        }
    }
}

/* ---------- place departures (admin) ---------- */

pub fn save_departure(app: &mut App) {
    let form = &app.state.gui.departure_form;
    let place_name = normalize_name(&form.place_name);
    let bus_no = form.bus_no.trim().to_string();
    if place_name.is_empty() || bus_no.is_empty() || form.bus_type.is_empty() {
        app.status("Place, bus number and type are required");
        return;
    }
    let departure_time = form.departure_time.trim().to_string();
    if let Err(msg) = validate::check_trip_time(&departure_time) {
        app.status(msg);
        return;
    }

    let body = NewPlaceDeparture {
        place_name,
        bus_no,
        bus_type: form.bus_type.clone(),
        departure_time,
    };
    let editing = form.editing;

    app.busy = true;
    let result = match editing {
        Some(id) => api::places::update_departure(&app.api, id, &body).map(|_| ()),
        None => api::places::create_departure(&app.api, &body).map(|_| ()),
    };
    app.busy = false;

    match result {
        Ok(()) => {
            logf!(
                "Departure: saved {}/{} (editing={:?})",
                body.place_name, body.bus_no, editing
            );
            app.state.gui.departure_form = DepartureForm::default();
            app.status(if editing.is_some() {
                "Departure updated"
            } else {
                "Departure added"
            });
            refresh_departures(app);
            refresh_places(app);
        }
        Err(e) => {
            loge!("Departure: save failed: {}", e);
            app.status(format!("Could not save departure: {e}"));
        }
    }
}

pub fn delete_departure(app: &mut App, departure_id: i64) {
    app.busy = true;
    let result = api::places::delete_departure(&app.api, departure_id);
    app.busy = false;

    match result {
        Ok(()) => {
            logf!("Departure: deleted id={}", departure_id);
            if app.state.gui.departure_form.editing == Some(departure_id) {
                app.state.gui.departure_form = DepartureForm::default();
            }
            app.status("Departure deleted");
            refresh_departures(app);
            refresh_places(app);
        }
        Err(e) => {
            loge!("Departure: delete failed id={}: {}", departure_id, e);
            app.status(format!("Could not delete departure: {e}"));
        }
    }
}

/// Bulk overwrite of the departure table from the bus/timing records.
pub fn sync_departures(app: &mut App) {
    app.busy = true;
    let result = api::places::sync_departures(&app.api);
    app.busy = false;

    match result {
        Ok(()) => {
            logf!("Departure: sync ok");
            app.status("Departures rebuilt from timetable");
            refresh_departures(app);
            refresh_places(app);
        }
        Err(e) => {
            loge!("Departure: sync failed: {}", e);
            app.status(format!("Sync failed: {e}"));
        }
    }
}

/* ---------- session ---------- */

pub fn login(app: &mut App) {
    let username = app.state.gui.login_username.clone();
    let password = app.state.gui.login_password.clone();

    if app.state.session.login(&username, &password) {
        app.state.gui.login_open = false;
        app.state.gui.login_username.clear();
        app.state.gui.login_password.clear();
        app.status("Logged in as administrator");
        // Admin sections need these lists straight away.
        refresh_buses(app);
        refresh_departures(app);
    } else {
        app.state.gui.login_password.clear();
        app.status("Invalid username or password");
    }
}

pub fn logout(app: &mut App) {
    app.state.session.logout();
    // Back to the default public view, wherever the viewer was.
    app.set_current_index(0);
    app.status("Logged out");
}
