//! Maps sky positions to window pixels.
//!
//! Pipeline per body: ephemeris (azimuth, altitude) → [`sph2cart`] →
//! [`map_range`] from `[-180, 180]` onto a reversed screen range → truncate →
//! shift by half the sprite diameter. The horizon line is the sun's Y at
//! today's sunrise, so it rises and falls with the seasons.

use crate::ephemeris::Ephemeris;
use crate::math::{SKY_RADIUS, map_range, sph2cart};
use crate::types::{Body, GeoCoordinate, HorizontalPosition};
use crate::Result;
use chrono::{DateTime, Utc};

/// Window width in pixels.
pub const SCREEN_WIDTH: i32 = 1024;
/// Window height in pixels.
pub const SCREEN_HEIGHT: i32 = 746;
/// Sun sprite diameter.
pub const SUN_DIAMETER: i32 = 25;
/// Moon sprite diameter.
pub const MOON_DIAMETER: i32 = 24;
/// Observer marker diameter.
pub const OBSERVER_DIAMETER: i32 = 10;

const SKY_DOMAIN: (f64, f64) = (-SKY_RADIUS, SKY_RADIUS);

/// Drawing surface size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

/// Integer pixel coordinate (top-left of a sprite).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

/// Everything a front-end needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Top-left of the sun sprite.
    pub sun: ScreenPoint,
    /// Top-left of the moon sprite.
    pub moon: ScreenPoint,
    /// Top-left of the observer marker, sitting on the horizon.
    pub observer: ScreenPoint,
    /// Row of the horizon line.
    pub horizon_y: i32,
    /// Sun position the frame was computed from.
    pub sun_position: HorizontalPosition,
    /// Moon position the frame was computed from.
    pub moon_position: HorizontalPosition,
}

/// Stateless sky-to-screen mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkyProjector {
    screen: Screen,
    sun_diameter: i32,
    moon_diameter: i32,
    observer_diameter: i32,
}

impl Default for SkyProjector {
    fn default() -> Self {
        Self::new(Screen::default())
    }
}

impl SkyProjector {
    /// Creates a projector with the standard sprite sizes.
    #[must_use]
    pub const fn new(screen: Screen) -> Self {
        Self {
            screen,
            sun_diameter: SUN_DIAMETER,
            moon_diameter: MOON_DIAMETER,
            observer_diameter: OBSERVER_DIAMETER,
        }
    }

    /// Surface size.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// Diameter used for `body`.
    #[must_use]
    pub const fn diameter(&self, body: Body) -> i32 {
        match body {
            Body::Sun => self.sun_diameter,
            Body::Moon => self.moon_diameter,
        }
    }

    /// Observer marker diameter.
    #[must_use]
    pub const fn observer_diameter(&self) -> i32 {
        self.observer_diameter
    }

    /// Projects the sky at `instant` for an observer at `geo`.
    ///
    /// Nothing is cached: the same inputs always produce the same frame.
    /// On days without a sunrise (polar day/night) the horizon is taken from
    /// the sun at solar noon.
    ///
    /// # Errors
    /// Propagates ephemeris failures.
    pub fn project<E: Ephemeris>(
        &self,
        ephemeris: &E,
        instant: DateTime<Utc>,
        geo: GeoCoordinate,
    ) -> Result<Frame> {
        let sun_position = ephemeris.position_of(Body::Sun, instant, geo)?;
        let moon_position = ephemeris.position_of(Body::Moon, instant, geo)?;
        let horizon_y = self.horizon_y(ephemeris, instant, geo)?;

        Ok(Frame {
            sun: self.sprite_origin(Body::Sun, sun_position),
            moon: self.sprite_origin(Body::Moon, moon_position),
            observer: ScreenPoint {
                x: self.screen.width / 2,
                y: horizon_y - self.observer_diameter,
            },
            horizon_y,
            sun_position,
            moon_position,
        })
    }

    /// Row of the horizon line for the day containing `instant`.
    ///
    /// # Errors
    /// Propagates ephemeris failures.
    pub fn horizon_y<E: Ephemeris>(
        &self,
        ephemeris: &E,
        instant: DateTime<Utc>,
        geo: GeoCoordinate,
    ) -> Result<i32> {
        let times = ephemeris.day_times(instant, geo)?;
        let reference = times.sunrise().unwrap_or_else(|| times.solar_noon());
        let sun = ephemeris.position_of(Body::Sun, reference, geo)?;
        Ok(self.sky_y(self.sun_diameter, sun) as i32)
    }

    /// Top-left pixel of `body`'s sprite when it is at `position`.
    #[must_use]
    pub fn sprite_origin(&self, body: Body, position: HorizontalPosition) -> ScreenPoint {
        let diameter = self.diameter(body);
        ScreenPoint {
            x: self.sky_x(diameter, position) as i32 - diameter / 2,
            y: self.sky_y(diameter, position) as i32 - diameter / 2,
        }
    }

    /// Un-truncated screen X of a body's centre.
    fn sky_x(&self, diameter: i32, position: HorizontalPosition) -> f64 {
        let p = sph2cart(position.azimuth(), position.altitude());
        let range = (
            f64::from(self.screen.width - diameter / 2),
            f64::from(diameter),
        );
        map_range(SKY_DOMAIN, range, p.x)
    }

    /// Un-truncated screen Y of a body's centre.
    fn sky_y(&self, diameter: i32, position: HorizontalPosition) -> f64 {
        let p = sph2cart(position.azimuth(), position.altitude());
        let range = (
            f64::from(self.screen.height - diameter / 2),
            f64::from(diameter),
        );
        map_range(SKY_DOMAIN, range, p.y)
    }
}
