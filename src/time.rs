//! Julian date handling for the ephemeris.
//!
//! Day numbering follows SunCalc: Julian dates are derived from Unix
//! milliseconds, and the way back truncates to whole milliseconds.

#![allow(clippy::unreadable_literal)]

use crate::{Error, Result};
use chrono::{DateTime, TimeZone, Utc};

/// Milliseconds per day (86,400,000)
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Day Number of the Unix epoch at noon (1970-01-01 12:00:00 UTC)
const J1970: f64 = 2_440_588.0;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000: f64 = 2_451_545.0;

/// Julian date representation for astronomical calculations.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDate {
    jd: f64,
}

impl JulianDate {
    /// Creates a Julian date from a timezone-aware chrono `DateTime`.
    ///
    /// The zone only affects presentation; the same instant in any zone
    /// yields the same Julian date.
    ///
    /// # Example
    /// ```
    /// # use eclipse_sky::time::JulianDate;
    /// # use chrono::{DateTime, Utc};
    /// let epoch = "1970-01-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    /// assert_eq!(JulianDate::from_datetime(&epoch).julian_date(), 2_440_588.0);
    /// ```
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::from_unix_millis(datetime.timestamp_millis())
    }

    /// Creates a Julian date from milliseconds since the Unix epoch.
    #[must_use]
    pub fn from_unix_millis(millis: i64) -> Self {
        Self {
            jd: millis as f64 / MILLIS_PER_DAY - 0.5 + J1970,
        }
    }

    /// Wraps a raw Julian date value.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the value is not finite.
    pub fn from_julian(jd: f64) -> Result<Self> {
        if !jd.is_finite() {
            return Err(Error::invalid_datetime("julian date must be finite"));
        }
        Ok(Self { jd })
    }

    /// Gets the Julian Date (JD) value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Days elapsed since the J2000.0 epoch.
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.jd - J2000
    }

    /// Converts back to a UTC instant, truncating to whole milliseconds.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the instant is outside chrono's range.
    pub fn to_utc(&self) -> Result<DateTime<Utc>> {
        let millis = ((self.jd + 0.5 - J1970) * MILLIS_PER_DAY).trunc();
        if !(i64::MIN as f64..=i64::MAX as f64).contains(&millis) {
            return Err(Error::invalid_datetime("julian date out of range"));
        }
        DateTime::from_timestamp_millis(millis as i64)
            .ok_or_else(|| Error::invalid_datetime("julian date out of range"))
    }
}
