//! # Eclipse Sky
//!
//! Animates the apparent positions of the sun and moon for a place on Earth,
//! primarily to watch the geometry of a solar eclipse unfold.
//!
//! The crate is split into a toolkit-independent core and thin front-ends:
//!
//! - [`SimulationState`]: the simulated clock, step mode and step counter,
//!   mutated by [`Input`]s and advanced one repeat per tick
//! - [`SkyProjector`]: a pure mapping from (instant, location) to sprite
//!   pixels and a horizon line that follows the season
//! - [`Ephemeris`]: the position/day-times seam, implemented by [`SunCalc`]
//! - [`Session`] and [`run`]: the tick loop, talking to a [`Frontend`]
//!
//! ## Feature Flags
//!
//! - `raylib`: desktop window front-end. This is the normal way to run the
//!   visualizer (`cargo run --features raylib`). Without it the binary only
//!   supports `--headless` and exits with a render surface error otherwise.
//!
//! ## Quick Start
//!
//! ```rust
//! use eclipse_sky::{GeoCoordinate, Input, Session, SimulationState, SkyProjector, SunCalc};
//! use chrono::TimeZone;
//! use chrono_tz::America::Denver;
//!
//! let teton = GeoCoordinate::new(43.833333, -110.700833).unwrap();
//! let start = Denver.with_ymd_and_hms(2017, 8, 21, 10, 36, 0).unwrap();
//! let state = SimulationState::new(teton, start, 1).unwrap(); // "1 Hour"
//! let mut session = Session::new(state, SunCalc, SkyProjector::default()).unwrap();
//!
//! session.handle_input(Input::StepForward).unwrap();
//! for _ in 0..60 {
//!     session.tick().unwrap();
//! }
//! assert_eq!(session.state().clock().to_rfc3339(), "2017-08-21T11:36:00-06:00");
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: radians, 0 = south, increasing toward west
//! - **Altitude**: radians above the horizon
//! - **Screen**: origin top-left, integer pixels

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
    clippy::float_cmp, // Exact comparisons of screen endpoints in tests
)]

// Public API exports
pub use crate::controller::{Control, Input, Phase, STEP_MODES, SimulationState, StepMode};
pub use crate::ephemeris::Ephemeris;
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::projector::{Frame, Screen, ScreenPoint, SkyProjector};
pub use crate::session::{Frontend, Session, run};
pub use crate::suncalc::SunCalc;
pub use crate::types::{Body, DayTimes, GeoCoordinate, Horizon, HorizontalPosition, SunriseResult};

// Core modules
pub mod error;
pub mod types;

// Ephemeris
pub mod ephemeris;
pub mod suncalc;

// Simulation
pub mod controller;
pub mod projector;
pub mod session;

// Outer surfaces
pub mod config;
pub mod frontend;

// Internal modules
mod math;

// Public modules
pub mod time;

pub use crate::math::{SkyPoint, map_range, sph2cart};
