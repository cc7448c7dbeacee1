#![allow(dead_code)]

use chrono::{DateTime, TimeZone};
use chrono_tz::America::Denver;
use chrono_tz::Tz;
use eclipse_sky::{GeoCoordinate, Session, SimulationState, SkyProjector, SunCalc};

pub const TETON_LATITUDE: f64 = 43.833333;
pub const TETON_LONGITUDE: f64 = -110.700833;

pub fn teton() -> GeoCoordinate {
    GeoCoordinate::new(TETON_LATITUDE, TETON_LONGITUDE).unwrap()
}

pub fn totality() -> DateTime<Tz> {
    Denver.with_ymd_and_hms(2017, 8, 21, 10, 36, 0).unwrap()
}

pub fn teton_session(mode_index: usize) -> Session<SunCalc> {
    let state = SimulationState::new(teton(), totality(), mode_index).unwrap();
    Session::new(state, SunCalc, SkyProjector::default()).unwrap()
}

/// Ticks until the step in progress is exhausted; returns the tick count.
pub fn tick_until_idle(session: &mut Session<SunCalc>) -> usize {
    let mut ticks = 0;
    while session.state().counter() != 0 {
        session.tick().unwrap();
        ticks += 1;
        assert!(ticks <= 1000, "step never finished");
    }
    ticks
}
