//! Core data types shared by the ephemeris, controller and projector.

use crate::error::{check_coordinates, check_finite_angle};
use crate::math::{normalize_degrees_0_to_360, radians_to_degrees};
use crate::Result;
use chrono::{DateTime, Utc};

/// Observer location on Earth in decimal degrees.
///
/// # Example
/// ```
/// # use eclipse_sky::types::GeoCoordinate;
/// let teton = GeoCoordinate::new(43.833333, -110.700833).unwrap();
/// assert_eq!(teton.latitude(), 43.833333);
/// assert!(GeoCoordinate::new(95.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Creates a validated coordinate.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees, north positive.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, east positive.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Bodies the ephemeris can place in the sky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    /// The sun
    Sun,
    /// The moon
    Moon,
}

/// Apparent position of a body in the observer's sky.
///
/// Angles are radians. Azimuth is measured from south, increasing toward
/// west; altitude is the angle above the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalPosition {
    azimuth: f64,
    altitude: f64,
}

impl HorizontalPosition {
    /// Creates a position from azimuth and altitude in radians.
    ///
    /// # Errors
    /// Returns `ComputationError` if either angle is not finite.
    pub fn new(azimuth: f64, altitude: f64) -> Result<Self> {
        Ok(Self {
            azimuth: check_finite_angle(azimuth, "azimuth is not finite")?,
            altitude: check_finite_angle(altitude, "altitude is not finite")?,
        })
    }

    /// Azimuth in radians (0 = south, positive toward west).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Altitude above the horizon in radians.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Compass bearing in degrees (0° = north, clockwise).
    #[must_use]
    pub fn bearing_degrees(&self) -> f64 {
        normalize_degrees_0_to_360(radians_to_degrees(self.azimuth) + 180.0)
    }

    /// Altitude in degrees.
    #[must_use]
    pub const fn altitude_degrees(&self) -> f64 {
        radians_to_degrees(self.altitude)
    }

    /// Whether the body is above the horizon.
    #[must_use]
    pub fn is_up(&self) -> bool {
        self.altitude > 0.0
    }
}

/// Sun altitudes that define the daily rise/set events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizon {
    /// Sunrise/sunset (upper limb touches the refracted horizon)
    SunriseSunset,
    /// End of sunrise / start of sunset (sun fully above the horizon)
    SunriseEnd,
    /// Civil twilight (sun is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun is 18° below horizon)
    AstronomicalTwilight,
    /// Golden hour (sun is 6° above horizon)
    GoldenHour,
}

impl Horizon {
    /// Every horizon, in the order day times are computed.
    pub const ALL: [Self; 6] = [
        Self::SunriseSunset,
        Self::SunriseEnd,
        Self::CivilTwilight,
        Self::NauticalTwilight,
        Self::AstronomicalTwilight,
        Self::GoldenHour,
    ];

    /// Gets the sun altitude in degrees for this horizon definition.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => -0.833,
            Self::SunriseEnd => -0.3,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::GoldenHour => 6.0,
        }
    }
}

/// Rise and set of the sun across one horizon for a given day.
///
/// At high latitudes the sun may never cross the horizon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SunriseResult<T> {
    /// Regular day with distinct sunrise, transit (noon), and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of solar transit (solar noon)
        transit: T,
        /// Time of sunset
        sunset: T,
    },
    /// Polar day - sun remains above the horizon all day
    AllDay {
        /// Time of solar transit
        transit: T,
    },
    /// Polar night - sun remains below the horizon all day
    AllNight {
        /// Time of solar transit
        transit: T,
    },
}

impl<T> SunriseResult<T> {
    /// Gets the transit time (solar noon) for any sunrise result.
    pub const fn transit(&self) -> &T {
        match self {
            Self::RegularDay { transit, .. }
            | Self::AllDay { transit }
            | Self::AllNight { transit } => transit,
        }
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight { .. })
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }
}

/// Sun event times for the day containing a given instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTimes {
    solar_noon: DateTime<Utc>,
    nadir: DateTime<Utc>,
    events: Vec<(Horizon, SunriseResult<DateTime<Utc>>)>,
}

impl DayTimes {
    /// Assembles day times; `events` should hold one entry per horizon.
    #[must_use]
    pub fn new(
        solar_noon: DateTime<Utc>,
        nadir: DateTime<Utc>,
        events: Vec<(Horizon, SunriseResult<DateTime<Utc>>)>,
    ) -> Self {
        Self {
            solar_noon,
            nadir,
            events,
        }
    }

    /// Solar transit.
    #[must_use]
    pub const fn solar_noon(&self) -> DateTime<Utc> {
        self.solar_noon
    }

    /// Darkest moment, half a day before transit.
    #[must_use]
    pub const fn nadir(&self) -> DateTime<Utc> {
        self.nadir
    }

    /// Rise/set result for `horizon`, if it was computed.
    #[must_use]
    pub fn for_horizon(&self, horizon: Horizon) -> Option<&SunriseResult<DateTime<Utc>>> {
        self.events
            .iter()
            .find(|(h, _)| *h == horizon)
            .map(|(_, result)| result)
    }

    /// Sunrise, or `None` on a polar day or night.
    #[must_use]
    pub fn sunrise(&self) -> Option<DateTime<Utc>> {
        self.for_horizon(Horizon::SunriseSunset)
            .and_then(SunriseResult::sunrise)
            .copied()
    }

    /// Sunset, or `None` on a polar day or night.
    #[must_use]
    pub fn sunset(&self) -> Option<DateTime<Utc>> {
        self.for_horizon(Horizon::SunriseSunset)
            .and_then(SunriseResult::sunset)
            .copied()
    }
}
