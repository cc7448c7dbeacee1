//! The ephemeris seam.
//!
//! The controller and projector only ever ask two questions: where is a body
//! right now, and when does the sun rise and set today. Any implementation
//! answering both with comparable accuracy can be swapped in.

use crate::types::{Body, DayTimes, GeoCoordinate, HorizontalPosition};
use crate::Result;
use chrono::{DateTime, Utc};

/// Source of sun and moon positions.
pub trait Ephemeris {
    /// Apparent position of `body` at `instant` as seen from `geo`.
    ///
    /// # Errors
    /// Returns an ephemeris error if the instant or location is unusable.
    fn position_of(
        &self,
        body: Body,
        instant: DateTime<Utc>,
        geo: GeoCoordinate,
    ) -> Result<HorizontalPosition>;

    /// Sun event times for the day containing `instant` at `geo`.
    ///
    /// # Errors
    /// Returns an ephemeris error if the instant or location is unusable.
    fn day_times(&self, instant: DateTime<Utc>, geo: GeoCoordinate) -> Result<DayTimes>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn position_of(
        &self,
        body: Body,
        instant: DateTime<Utc>,
        geo: GeoCoordinate,
    ) -> Result<HorizontalPosition> {
        (**self).position_of(body, instant, geo)
    }

    fn day_times(&self, instant: DateTime<Utc>, geo: GeoCoordinate) -> Result<DayTimes> {
        (**self).day_times(instant, geo)
    }
}
