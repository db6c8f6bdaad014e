// src/cli.rs
use std::env;
use std::error::Error;

use crate::api::{self, ApiClient, ApiError};
use crate::config::options::Backend;
use crate::query::{clock, departures, route};
use crate::text::{capitalize, format_time_12h, normalize_name};

pub enum Command {
    Search {
        source: String,
        destination: String,
        bus_no: Option<String>,
        bus_type: Option<String>,
    },
    Departures(String),
    ListBuses,
    ListStops,
    ListPlaces,
}

pub struct Params {
    pub command: Command,
    pub backend: Backend,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_cli()?;
    let api = ApiClient::new(params.backend.base_url())?;
    let now = clock::now_hhmm();

    match params.command {
        Command::Search {
            source,
            destination,
            bus_no,
            bus_type,
        } => {
            let raw = api::routes::search(
                &api,
                &normalize_name(&source),
                &normalize_name(&destination),
                bus_no.as_deref(),
                bus_type.as_deref(),
            )?;
            let matches = route::plan(&raw, &now);
            if matches.is_empty() {
                println!("No buses found for this route right now.");
                return Ok(());
            }
            for m in matches {
                print!("Bus {} ({})", m.bus_no, m.bus_type);
                for slot in m.slots {
                    if slot.highlighted {
                        print!("  [{}]", format_time_12h(&slot.time));
                    } else {
                        print!("  {}", format_time_12h(&slot.time));
                    }
                }
                println!();
            }
        }
        Command::Departures(place) => {
            let raw = match api::places::departures_for(&api, &normalize_name(&place)) {
                Ok(raw) => raw,
                Err(ApiError::NotFound) => {
                    println!("No departures found from this location.");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };
            let board = departures::board(&raw, &now);
            println!("Departures from {}:", capitalize(&place));
            for bus in board {
                print!("Bus {} ({})", bus.bus_no, bus.bus_type);
                for slot in bus.slots {
                    let t = format_time_12h(&slot.time);
                    if slot.past {
                        print!("  ({t})");
                    } else if slot.highlighted {
                        print!("  [{t}]");
                    } else {
                        print!("  {t}");
                    }
                }
                println!();
            }
        }
        Command::ListBuses => {
            for b in api::buses::list(&api)? {
                println!(
                    "{}\t{}\t{} → {}",
                    b.bus_no,
                    b.bus_type,
                    capitalize(&b.start_bus),
                    capitalize(&b.end_bus)
                );
            }
        }
        Command::ListStops => {
            for s in api::stops::list(&api)? {
                println!("{}", capitalize(&s.stop_name));
            }
        }
        Command::ListPlaces => {
            for p in api::places::list_places(&api)? {
                println!("{}", capitalize(&p));
            }
        }
    }
    Ok(())
}

fn parse_cli() -> Result<Params, Box<dyn Error>> {
    let mut backend = Backend::from_env();
    let mut command: Option<Command> = None;

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "search" => {
                let source = args.next().ok_or("Missing source stop")?;
                let destination = args.next().ok_or("Missing destination stop")?;
                command = Some(Command::Search {
                    source,
                    destination,
                    bus_no: None,
                    bus_type: None,
                });
            }
            "departures" => {
                let place = args.next().ok_or("Missing place name")?;
                command = Some(Command::Departures(place));
            }
            "buses" => command = Some(Command::ListBuses),
            "stops" => command = Some(Command::ListStops),
            "places" => command = Some(Command::ListPlaces),
            "--bus-no" => {
                let v = args.next().ok_or("Missing value for --bus-no")?;
                match command {
                    Some(Command::Search { ref mut bus_no, .. }) => *bus_no = Some(v),
                    _ => return Err("--bus-no only applies to search".into()),
                }
            }
            "--type" => {
                let v = args.next().ok_or("Missing value for --type")?;
                match command {
                    Some(Command::Search {
                        ref mut bus_type, ..
                    }) => *bus_type = Some(v),
                    _ => return Err("--type only applies to search".into()),
                }
            }
            "--backend" => {
                let v = args.next().ok_or("Missing value for --backend")?;
                backend = Backend::Custom(v);
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    match command {
        Some(command) => Ok(Params { command, backend }),
        None => Err("No command given (try --help)".into()),
    }
}
