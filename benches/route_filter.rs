// benches/route_filter.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use citybus::api::models::{PlaceDeparture, RouteBus};
use citybus::query::{departures, route};

fn sample_routes(buses: usize, times: usize) -> Vec<RouteBus> {
    (0..buses)
        .map(|b| RouteBus {
            bus_no: format!("{b}"),
            bus_type: "ordinary".into(),
            timings: (0..times)
                .map(|t| format!("{:02}:{:02}", (6 + t) % 24, (b * 7) % 60))
                .collect(),
        })
        .collect()
}

fn sample_departures(buses: usize, times: usize) -> Vec<PlaceDeparture> {
    let mut out = Vec::new();
    let mut id = 0;
    for b in 0..buses {
        for t in 0..times {
            id += 1;
            out.push(PlaceDeparture {
                departure_id: id,
                place_name: "market".into(),
                bus_no: format!("{b}"),
                bus_type: "ordinary".into(),
                departure_time: format!("{:02}:{:02}", (5 + t) % 24, (b * 11) % 60),
            });
        }
    }
    out
}

fn bench_route_plan(c: &mut Criterion) {
    let raw = sample_routes(50, 20);

    c.bench_function("route_plan_50x20", |b| {
        b.iter(|| {
            let out = route::plan(black_box(&raw), black_box("12:30"));
            black_box(out.len())
        })
    });
}

fn bench_departure_board(c: &mut Criterion) {
    let raw = sample_departures(50, 20);

    c.bench_function("departure_board_50x20", |b| {
        b.iter(|| {
            let out = departures::board(black_box(&raw), black_box("12:30"));
            black_box(out.len())
        })
    });
}

criterion_group!(benches, bench_route_plan, bench_departure_board);
criterion_main!(benches);
