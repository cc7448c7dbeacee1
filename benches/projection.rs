use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::America::Denver;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use eclipse_sky::{
    Body, Ephemeris, GeoCoordinate, Input, Session, SimulationState, SkyProjector, SunCalc,
};
use std::hint::black_box;

fn teton() -> GeoCoordinate {
    GeoCoordinate::new(43.833333, -110.700833).unwrap()
}

fn totality() -> DateTime<Utc> {
    "2017-08-21T17:36:00Z".parse().unwrap()
}

fn benchmark_single_calculation(c: &mut Criterion) {
    let instant = totality();
    let geo = teton();

    c.bench_function("sun_position", |b| {
        b.iter(|| {
            SunCalc
                .position_of(Body::Sun, black_box(instant), black_box(geo))
                .unwrap()
        })
    });

    c.bench_function("moon_position", |b| {
        b.iter(|| {
            SunCalc
                .position_of(Body::Moon, black_box(instant), black_box(geo))
                .unwrap()
        })
    });

    c.bench_function("day_times", |b| {
        b.iter(|| SunCalc.day_times(black_box(instant), black_box(geo)).unwrap())
    });

    let projector = SkyProjector::default();
    c.bench_function("project_frame", |b| {
        b.iter(|| {
            projector
                .project(&SunCalc, black_box(instant), black_box(geo))
                .unwrap()
        })
    });
}

fn benchmark_frame_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_series");
    let projector = SkyProjector::default();
    let geo = teton();

    for count in [60_u64, 600, 3600] {
        group.throughput(Throughput::Elements(count));
        let instants: Vec<_> = (0..count)
            .map(|i| totality() + Duration::seconds(i as i64))
            .collect();

        group.bench_with_input(BenchmarkId::new("project", count), &count, |b, _| {
            b.iter(|| {
                for &instant in &instants {
                    black_box(projector.project(&SunCalc, instant, geo).unwrap());
                }
            })
        });
    }

    group.finish();
}

fn benchmark_full_step(c: &mut Criterion) {
    let start = Denver.with_ymd_and_hms(2017, 8, 21, 10, 36, 0).unwrap();

    c.bench_function("one_hour_step", |b| {
        b.iter(|| {
            let state = SimulationState::new(teton(), start, 1).unwrap();
            let mut session = Session::new(state, SunCalc, SkyProjector::default()).unwrap();
            session.handle_input(Input::StepForward).unwrap();
            for _ in 0..60 {
                black_box(session.tick().unwrap());
            }
        })
    });
}

criterion_group!(
    benches,
    benchmark_single_calculation,
    benchmark_frame_series,
    benchmark_full_step
);
criterion_main!(benches);
