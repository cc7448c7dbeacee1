//! SunCalc ephemeris.
//!
//! Low-precision sun and moon formulas after Astronomy Answers
//! (<https://aa.quae.nl/en/reken/hemelpositie.html>), as popularised by the
//! SunCalc library. Accuracy is on the order of a few arc minutes for the sun
//! and a fraction of a degree for the moon, plenty for placing sprites.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::ephemeris::Ephemeris;
use crate::error::check_coordinates;
use crate::math::{PI, RAD};
use crate::time::JulianDate;
use crate::types::{
    Body, DayTimes, GeoCoordinate, Horizon, HorizontalPosition, SunriseResult,
};
use crate::{Error, Result};
use chrono::{DateTime, Utc};

/// Obliquity of the Earth's axis.
const OBLIQUITY: f64 = RAD * 23.4397;

/// Julian day offset used by the transit approximation.
const J0: f64 = 0.0009;

/// The default ephemeris.
///
/// # Example
/// ```
/// use eclipse_sky::{Body, Ephemeris, GeoCoordinate, SunCalc};
/// use chrono::{DateTime, Utc};
///
/// let instant = "2017-08-21T17:36:00Z".parse::<DateTime<Utc>>().unwrap();
/// let teton = GeoCoordinate::new(43.833333, -110.700833).unwrap();
///
/// let sun = SunCalc.position_of(Body::Sun, instant, teton).unwrap();
/// let moon = SunCalc.position_of(Body::Moon, instant, teton).unwrap();
/// // Near totality the two bodies almost overlap.
/// assert!((sun.altitude() - moon.altitude()).abs() < 0.05);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SunCalc;

impl Ephemeris for SunCalc {
    fn position_of(
        &self,
        body: Body,
        instant: DateTime<Utc>,
        geo: GeoCoordinate,
    ) -> Result<HorizontalPosition> {
        match body {
            Body::Sun => sun_position(instant, geo.latitude(), geo.longitude()),
            Body::Moon => moon_position(instant, geo.latitude(), geo.longitude()),
        }
    }

    fn day_times(&self, instant: DateTime<Utc>, geo: GeoCoordinate) -> Result<DayTimes> {
        day_times(instant, geo.latitude(), geo.longitude())
    }
}

/// Right ascension and declination, radians.
#[derive(Debug, Clone, Copy)]
struct EquatorialCoords {
    right_ascension: f64,
    declination: f64,
}

/// Calculate the sun's apparent position.
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
pub fn sun_position(
    instant: DateTime<Utc>,
    latitude: f64,
    longitude: f64,
) -> Result<HorizontalPosition> {
    check_coordinates(latitude, longitude)?;

    let lw = RAD * -longitude;
    let phi = RAD * latitude;
    let d = JulianDate::from_datetime(&instant).days_since_j2000();

    let c = sun_coords(d);
    let h = sidereal_time(d, lw) - c.right_ascension;

    HorizontalPosition::new(
        azimuth(h, phi, c.declination),
        altitude(h, phi, c.declination),
    )
}

/// Calculate the moon's apparent position, refraction included.
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
pub fn moon_position(
    instant: DateTime<Utc>,
    latitude: f64,
    longitude: f64,
) -> Result<HorizontalPosition> {
    check_coordinates(latitude, longitude)?;

    let lw = RAD * -longitude;
    let phi = RAD * latitude;
    let d = JulianDate::from_datetime(&instant).days_since_j2000();

    let (c, _) = moon_coords(d);
    let h = sidereal_time(d, lw) - c.right_ascension;
    let alt = altitude(h, phi, c.declination);

    HorizontalPosition::new(
        azimuth(h, phi, c.declination),
        alt + astro_refraction(alt),
    )
}

/// Earth–moon distance in kilometres.
#[must_use]
pub fn moon_distance_km(instant: DateTime<Utc>) -> f64 {
    let d = JulianDate::from_datetime(&instant).days_since_j2000();
    moon_coords(d).1
}

/// Calculate solar noon, nadir and the rise/set pairs of every [`Horizon`].
///
/// The day is the solar cycle nearest to `instant` at the given longitude,
/// so the result may straddle the local calendar date.
///
/// # Errors
/// Returns error for invalid coordinates or instants outside the representable range.
pub fn day_times(instant: DateTime<Utc>, latitude: f64, longitude: f64) -> Result<DayTimes> {
    check_coordinates(latitude, longitude)?;

    let lw = RAD * -longitude;
    let phi = RAD * latitude;
    let d = JulianDate::from_datetime(&instant).days_since_j2000();

    let n = julian_cycle(d, lw);
    let ds = approx_transit(0.0, lw, n);
    let m = solar_mean_anomaly(ds);
    let l = ecliptic_longitude(m);
    let dec = declination(l, 0.0);
    let j_noon = solar_transit_j(ds, m, l);

    let solar_noon = to_instant(j_noon)?;
    let nadir = to_instant(j_noon - 0.5)?;

    let mut events = Vec::with_capacity(Horizon::ALL.len());
    for horizon in Horizon::ALL {
        let h0 = horizon.elevation_angle() * RAD;
        let cos_w = hour_angle_cosine(h0, phi, dec);

        let result = if cos_w.is_nan() {
            return Err(Error::computation_error("hour angle is undefined"));
        } else if cos_w > 1.0 {
            SunriseResult::AllNight {
                transit: solar_noon,
            }
        } else if cos_w < -1.0 {
            SunriseResult::AllDay {
                transit: solar_noon,
            }
        } else {
            let a = approx_transit(cos_w.acos(), lw, n);
            let j_set = solar_transit_j(a, m, l);
            let j_rise = j_noon - (j_set - j_noon);
            SunriseResult::RegularDay {
                sunrise: to_instant(j_rise)?,
                transit: solar_noon,
                sunset: to_instant(j_set)?,
            }
        };
        events.push((horizon, result));
    }

    Ok(DayTimes::new(solar_noon, nadir, events))
}

fn to_instant(jd: f64) -> Result<DateTime<Utc>> {
    JulianDate::from_julian(jd)?.to_utc()
}

fn right_ascension(l: f64, b: f64) -> f64 {
    (l.sin() * OBLIQUITY.cos() - b.tan() * OBLIQUITY.sin()).atan2(l.cos())
}

fn declination(l: f64, b: f64) -> f64 {
    (b.sin() * OBLIQUITY.cos() + b.cos() * OBLIQUITY.sin() * l.sin()).asin()
}

fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
}

fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin()
}

fn sidereal_time(d: f64, lw: f64) -> f64 {
    RAD * (280.16 + 360.9856235 * d) - lw
}

/// Bennett's refraction formula; altitudes below the horizon are clamped to 0.
fn astro_refraction(h: f64) -> f64 {
    let h = if h < 0.0 { 0.0 } else { h };
    0.0002967 / (h + 0.00312536 / (h + 0.08901179)).tan()
}

fn solar_mean_anomaly(d: f64) -> f64 {
    RAD * (357.5291 + 0.98560028 * d)
}

fn ecliptic_longitude(m: f64) -> f64 {
    // equation of center
    let c = RAD * (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin());
    // perihelion of the Earth
    let p = RAD * 102.9372;
    m + c + p + PI
}

fn sun_coords(d: f64) -> EquatorialCoords {
    let l = ecliptic_longitude(solar_mean_anomaly(d));
    EquatorialCoords {
        right_ascension: right_ascension(l, 0.0),
        declination: declination(l, 0.0),
    }
}

/// Geocentric moon coordinates and distance in km.
fn moon_coords(d: f64) -> (EquatorialCoords, f64) {
    let l = RAD * (218.316 + 13.176396 * d); // ecliptic longitude
    let m = RAD * (134.963 + 13.064993 * d); // mean anomaly
    let f = RAD * (93.272 + 13.229350 * d); // mean distance

    let lng = l + RAD * 6.289 * m.sin();
    let lat = RAD * 5.128 * f.sin();
    let distance = 385001.0 - 20905.0 * m.cos();

    (
        EquatorialCoords {
            right_ascension: right_ascension(lng, lat),
            declination: declination(lng, lat),
        },
        distance,
    )
}

fn julian_cycle(d: f64, lw: f64) -> f64 {
    (d - J0 - lw / (2.0 * PI)).round()
}

fn approx_transit(ht: f64, lw: f64, n: f64) -> f64 {
    J0 + (ht + lw) / (2.0 * PI) + n
}

/// Absolute Julian date of the transit near `ds`.
fn solar_transit_j(ds: f64, m: f64, l: f64) -> f64 {
    2_451_545.0 + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin()
}

/// Cosine of the hour angle at which the sun reaches altitude `h`.
///
/// Outside [-1, 1] the sun never reaches that altitude on this day.
fn hour_angle_cosine(h: f64, phi: f64, dec: f64) -> f64 {
    (h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(s: &str) -> DateTime<Utc> {
        s.parse::<DateTime<Utc>>().unwrap()
    }

    #[test]
    fn test_sun_position_basic_functionality() {
        let position = sun_position(instant("2023-06-21T19:00:00Z"), 37.7749, -122.4194).unwrap();

        // About an hour before solar noon in San Francisco: high and east of south.
        assert!(position.is_up());
        assert!(position.altitude_degrees() > 60.0);
        assert!(position.azimuth() < 0.0);
    }

    #[test]
    fn test_coordinate_validation() {
        let t = instant("2023-06-21T19:00:00Z");
        assert!(sun_position(t, 95.0, 0.0).is_err());
        assert!(moon_position(t, 0.0, 185.0).is_err());
        assert!(day_times(t, -91.0, 0.0).is_err());
    }

    #[test]
    fn test_sun_below_horizon_at_night() {
        let position = sun_position(instant("2023-06-22T07:00:00Z"), 37.7749, -122.4194).unwrap();
        assert!(!position.is_up());
    }

    #[test]
    fn test_refraction_lifts_low_moon() {
        assert!(astro_refraction(-0.2) > 0.0);
        assert_eq!(astro_refraction(-0.2), astro_refraction(0.0));
        assert!(astro_refraction(0.0) > astro_refraction(0.5));
    }

    #[test]
    fn test_day_times_ordering() {
        let times = day_times(instant("2017-08-21T16:36:00Z"), 43.833333, -110.700833).unwrap();

        let sunrise = times.sunrise().unwrap();
        let sunset = times.sunset().unwrap();
        assert!(sunrise < times.solar_noon());
        assert!(times.solar_noon() < sunset);
        let half_day = (times.solar_noon() - times.nadir()).num_minutes();
        assert!((719..=720).contains(&half_day));

        let civil = times.for_horizon(Horizon::CivilTwilight).unwrap();
        assert!(*civil.sunrise().unwrap() < sunrise);
        assert!(*civil.sunset().unwrap() > sunset);

        let golden = times.for_horizon(Horizon::GoldenHour).unwrap();
        assert!(*golden.sunrise().unwrap() > sunrise);
        assert!(*golden.sunset().unwrap() < sunset);
    }

    #[test]
    fn test_polar_day_and_night() {
        let june = instant("2023-06-21T12:00:00Z");
        let times = day_times(june, 78.22, 15.65).unwrap();
        let result = times.for_horizon(Horizon::SunriseSunset).unwrap();
        assert!(result.is_polar_day());
        assert_eq!(times.sunrise(), None);

        let december = instant("2023-12-21T12:00:00Z");
        let times = day_times(december, 78.22, 15.65).unwrap();
        let result = times.for_horizon(Horizon::SunriseSunset).unwrap();
        assert!(result.is_polar_night());
        assert_eq!(result.transit(), &times.solar_noon());
    }

    #[test]
    fn test_moon_distance_range() {
        let distance = moon_distance_km(instant("2017-08-21T17:36:00Z"));
        assert!((364_096.0..=405_906.0).contains(&distance));
    }
}
