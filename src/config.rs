//! Startup settings.
//!
//! Defaults place the observer in Grand Teton National Park at the 2017
//! total eclipse. Every value can be overridden from the command line.

use crate::controller::{DEFAULT_STEP_MODE, Input, SimulationState};
use crate::types::GeoCoordinate;
use crate::{Error, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use clap::Parser;

/// Default observer latitude (Grand Teton National Park).
pub const DEFAULT_LATITUDE: f64 = 43.833333;
/// Default observer longitude (Grand Teton National Park).
pub const DEFAULT_LONGITUDE: f64 = -110.700833;
/// Default start, local wall time.
pub const DEFAULT_START: &str = "2017-08-21T10:36:00";
/// Zone the start time is interpreted in.
pub const DEFAULT_TIMEZONE: &str = "America/Denver";
/// Frame cap for headless runs.
pub const DEFAULT_MAX_FRAMES: usize = 100_000;

/// Command line of the `eclipse-sky` binary.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "eclipse-sky",
    version,
    about = "Animate the sun and moon across the sky for a place and time",
    after_help = "Every flag is optional. Without flags the 2017 eclipse at Grand Teton is shown."
)]
pub struct Args {
    /// Observer latitude in decimal degrees
    #[arg(long, default_value_t = DEFAULT_LATITUDE, allow_negative_numbers = true)]
    pub latitude: f64,

    /// Observer longitude in decimal degrees
    #[arg(long, default_value_t = DEFAULT_LONGITUDE, allow_negative_numbers = true)]
    pub longitude: f64,

    /// Start time as local wall time, e.g. 2017-08-21T10:36:00
    #[arg(long, default_value = DEFAULT_START)]
    pub start: NaiveDateTime,

    /// IANA zone for the start time and the window title
    #[arg(long, default_value = DEFAULT_TIMEZONE)]
    pub timezone: String,

    /// Initial step mode (0 = 1 minute .. 5 = 5 years)
    #[arg(long, default_value_t = DEFAULT_STEP_MODE)]
    pub mode: usize,

    /// Run without a window, replaying --script
    #[arg(long)]
    pub headless: bool,

    /// Comma-separated keys for headless runs (left,right,up,down,r,s,n,escape)
    #[arg(long, value_delimiter = ',')]
    pub script: Vec<Input>,

    /// Stop a headless run after this many frames
    #[arg(long, default_value_t = DEFAULT_MAX_FRAMES)]
    pub max_frames: usize,
}

/// Validated startup settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Observer location.
    pub geo: GeoCoordinate,
    /// Starting instant.
    pub start: DateTime<Tz>,
    /// Initial step mode index.
    pub mode_index: usize,
}

impl SessionConfig {
    /// Validates raw arguments.
    ///
    /// # Errors
    /// Returns a `Configuration` error for out-of-range coordinates, an
    /// unknown zone, a start time that does not exist in that zone, or a bad
    /// mode index.
    pub fn from_args(args: &Args) -> Result<Self> {
        let geo = GeoCoordinate::new(args.latitude, args.longitude)
            .map_err(|_| Error::invalid_location(args.latitude, args.longitude))?;
        let tz: Tz = args
            .timezone
            .parse()
            .map_err(|_| Error::invalid_time_zone(&args.timezone))?;
        let start = resolve_local(tz, &args.start)?;

        let config = Self {
            geo,
            start,
            mode_index: args.mode,
        };
        config.initial_state()?;
        Ok(config)
    }

    /// Fresh simulation state for these settings.
    ///
    /// # Errors
    /// Returns `InvalidStepMode` for a bad mode index.
    pub fn initial_state(&self) -> Result<SimulationState> {
        SimulationState::new(self.geo, self.start, self.mode_index)
    }
}

/// Resolves a wall time in `tz`, taking the earlier instant when a DST
/// change makes it ambiguous.
fn resolve_local(tz: Tz, local: &NaiveDateTime) -> Result<DateTime<Tz>> {
    tz.from_local_datetime(local)
        .earliest()
        .ok_or_else(|| Error::invalid_start_time("wall time does not exist in time zone"))
}
