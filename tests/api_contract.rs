// tests/api_contract.rs
//
// Drives ApiClient against a one-shot local HTTP responder: the 404
// handling differs by endpoint (route search reads it as "no matches",
// the per-place lookup reports it), and free-text names must survive
// the trip into a URL path segment.
//
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use citybus::api::models::NewStop;
use citybus::api::{self, ApiClient, ApiError};

/// Serves exactly one request with the given status and JSON body.
/// Returns the base URL and a channel yielding the request line.
fn serve_once(status: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let n = stream.read(&mut buf).unwrap_or(0);
            let head = String::from_utf8_lossy(&buf[..n]);
            let line = head.lines().next().unwrap_or("").to_string();
            let _ = tx.send(line);

            let resp = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(resp.as_bytes());
        }
    });

    (format!("http://{addr}"), rx)
}

#[test]
fn route_search_reads_404_as_no_matches() {
    let (base, _rx) = serve_once("404 Not Found", r#"{"detail":"No buses found"}"#);
    let api = ApiClient::new(&base).expect("client");

    let out = api::routes::search(&api, "central", "airport", None, None).expect("search");
    assert!(out.is_empty());
}

#[test]
fn bus_timings_read_404_as_empty_timetable() {
    let (base, _rx) = serve_once("404 Not Found", r#"{"detail":"No timings"}"#);
    let api = ApiClient::new(&base).expect("client");

    let out = api::timings::for_bus(&api, 7).expect("timings");
    assert!(out.is_empty());
}

#[test]
fn place_departures_surface_404_as_an_error() {
    let (base, _rx) = serve_once("404 Not Found", r#"{"detail":"Not found"}"#);
    let api = ApiClient::new(&base).expect("client");

    let err = api::places::departures_for(&api, "nowhere").unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}

#[test]
fn backend_detail_is_surfaced_verbatim() {
    let (base, _rx) = serve_once("400 Bad Request", r#"{"detail":"Stop already exists"}"#);
    let api = ApiClient::new(&base).expect("client");

    let err = api::stops::create(
        &api,
        &NewStop {
            stop_name: "central".into(),
        },
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Stop already exists");
}

#[test]
fn status_without_detail_gets_a_generic_message() {
    let (base, _rx) = serve_once("500 Internal Server Error", "oops");
    let api = ApiClient::new(&base).expect("client");

    let err = api::buses::list(&api).unwrap_err();
    assert_eq!(err.to_string(), "Request failed (HTTP 500)");
}

#[test]
fn place_names_are_escaped_in_the_path() {
    let (base, rx) = serve_once("200 OK", "[]");
    let api = ApiClient::new(&base).expect("client");

    // '?' and '/' would otherwise reroute the request.
    let out = api::places::departures_for(&api, "rose park? a/b").expect("lookup");
    assert!(out.is_empty());

    let line = rx.recv().expect("request line");
    assert!(
        line.starts_with("GET /place_departures/rose%20park%3F%20a%2Fb "),
        "unexpected request line: {line}"
    );
}
