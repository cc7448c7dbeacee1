//! Simulated clock and the step/mode state machine driven by user input.
//!
//! A step input arms a signed repeat counter; each tick then moves the clock
//! by one repeat of the current mode until the counter is exhausted. While
//! the counter is non-zero further step inputs are ignored.

use crate::ephemeris::Ephemeris;
use crate::types::{DayTimes, GeoCoordinate, Horizon};
use crate::{Error, Result};
use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;
use core::fmt;
use core::str::FromStr;
use log::{debug, info, warn};

/// How far one step input moves the clock.
///
/// The move is split into `repeats` ticks of `seconds_per_repeat` each so the
/// bodies animate toward their new position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepMode {
    /// Label shown in the window title.
    pub name: &'static str,
    /// Ticks per step.
    pub repeats: u32,
    /// Simulated seconds added per tick.
    pub seconds_per_repeat: f64,
}

impl StepMode {
    /// Clock change applied on each tick.
    #[must_use]
    pub fn tick_delta(&self) -> TimeDelta {
        TimeDelta::milliseconds((self.seconds_per_repeat * 1000.0).round() as i64)
    }
}

/// Available step modes, cycled with the up/down inputs.
pub const STEP_MODES: [StepMode; 6] = [
    StepMode {
        name: "1 Minute",
        repeats: 1,
        seconds_per_repeat: 60.0,
    },
    StepMode {
        name: "1 Hour",
        repeats: 60,
        seconds_per_repeat: 60.0,
    },
    StepMode {
        name: "1 Day",
        repeats: 24,
        seconds_per_repeat: 3600.0,
    },
    StepMode {
        name: "30 Days",
        repeats: 30,
        seconds_per_repeat: 86_400.0,
    },
    StepMode {
        name: "365 Days",
        repeats: 365,
        seconds_per_repeat: 86_400.0,
    },
    StepMode {
        name: "5 years",
        repeats: 5,
        seconds_per_repeat: 86_400.0 * 365.25,
    },
];

/// Mode selected at startup ("1 Hour").
pub const DEFAULT_STEP_MODE: usize = 1;

/// Discrete user commands, independent of any window toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// Move the clock forward by one step of the current mode
    StepForward,
    /// Move the clock backward by one step of the current mode
    StepBackward,
    /// Select the next (larger) step mode
    ModeUp,
    /// Select the previous (smaller) step mode
    ModeDown,
    /// Set the clock to today's sunrise
    JumpSunrise,
    /// Set the clock to today's sunset
    JumpSunset,
    /// Set the clock to today's solar noon
    JumpSolarNoon,
    /// End the session
    Quit,
}

impl Input {
    /// Key name bound to this input.
    #[must_use]
    pub const fn key_name(&self) -> &'static str {
        match self {
            Self::StepForward => "right",
            Self::StepBackward => "left",
            Self::ModeUp => "up",
            Self::ModeDown => "down",
            Self::JumpSunrise => "r",
            Self::JumpSunset => "s",
            Self::JumpSolarNoon => "n",
            Self::Quit => "escape",
        }
    }
}

/// Error for unknown key names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey(pub String);

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown key '{}' (expected left, right, up, down, r, s, n or escape)",
            self.0
        )
    }
}

impl std::error::Error for UnknownKey {}

impl FromStr for Input {
    type Err = UnknownKey;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "right" => Ok(Self::StepForward),
            "left" => Ok(Self::StepBackward),
            "up" => Ok(Self::ModeUp),
            "down" => Ok(Self::ModeDown),
            "r" => Ok(Self::JumpSunrise),
            "s" => Ok(Self::JumpSunset),
            "n" => Ok(Self::JumpSolarNoon),
            "escape" | "esc" => Ok(Self::Quit),
            other => Err(UnknownKey(other.to_owned())),
        }
    }
}

/// What the session loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running
    Continue,
    /// Stop the session
    Quit,
}

/// Whether a step is being animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Counter is zero
    Idle,
    /// Counter is non-zero
    Stepping,
}

/// All mutable state of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    geo: GeoCoordinate,
    clock: DateTime<Tz>,
    mode_index: usize,
    counter: i32,
}

impl SimulationState {
    /// Creates an idle state.
    ///
    /// # Errors
    /// Returns `InvalidStepMode` if `mode_index` is outside [`STEP_MODES`].
    pub fn new(geo: GeoCoordinate, clock: DateTime<Tz>, mode_index: usize) -> Result<Self> {
        if mode_index >= STEP_MODES.len() {
            return Err(Error::invalid_step_mode(mode_index));
        }
        Ok(Self {
            geo,
            clock,
            mode_index,
            counter: 0,
        })
    }

    /// Observer location.
    #[must_use]
    pub const fn geo(&self) -> GeoCoordinate {
        self.geo
    }

    /// Current simulated instant.
    #[must_use]
    pub const fn clock(&self) -> &DateTime<Tz> {
        &self.clock
    }

    /// Index into [`STEP_MODES`].
    #[must_use]
    pub const fn mode_index(&self) -> usize {
        self.mode_index
    }

    /// Currently selected step mode.
    #[must_use]
    pub const fn mode(&self) -> &'static StepMode {
        &STEP_MODES[self.mode_index]
    }

    /// Remaining signed repeats of the step in progress.
    #[must_use]
    pub const fn counter(&self) -> i32 {
        self.counter
    }

    /// Current phase, derived from the counter.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.counter == 0 {
            Phase::Idle
        } else {
            Phase::Stepping
        }
    }

    /// Window title text: current time and step mode.
    #[must_use]
    pub fn caption(&self) -> String {
        format!(
            "{} - {}",
            self.clock.format("%Y-%m-%d %H:%M:%S %z"),
            self.mode().name
        )
    }

    /// Applies one user input.
    ///
    /// Step inputs are ignored while stepping. Mode changes and jumps are
    /// honoured in any phase and leave the counter alone. A jump on a day
    /// without sunrise or sunset (polar day/night) leaves the clock unchanged.
    ///
    /// # Errors
    /// Returns an ephemeris error if a jump cannot be resolved.
    pub fn apply<E: Ephemeris>(&mut self, input: Input, ephemeris: &E) -> Result<Control> {
        match input {
            Input::StepForward | Input::StepBackward if self.phase() == Phase::Stepping => {
                debug!(
                    "ignoring '{}' while stepping ({} left)",
                    input.key_name(),
                    self.counter
                );
            }
            Input::StepForward => {
                info!("Forward in time {}", self.mode().name);
                self.counter = self.repeats();
            }
            Input::StepBackward => {
                info!("Backward in time {}", self.mode().name);
                self.counter = -self.repeats();
            }
            Input::ModeUp => {
                self.mode_index = (self.mode_index + 1) % STEP_MODES.len();
                debug!("step mode {}", self.mode().name);
            }
            Input::ModeDown => {
                self.mode_index = (self.mode_index + STEP_MODES.len() - 1) % STEP_MODES.len();
                debug!("step mode {}", self.mode().name);
            }
            Input::JumpSunrise => {
                let times = ephemeris.day_times(self.clock.with_timezone(&Utc), self.geo)?;
                self.jump_to(&times, times.sunrise(), "sunrise");
            }
            Input::JumpSunset => {
                let times = ephemeris.day_times(self.clock.with_timezone(&Utc), self.geo)?;
                self.jump_to(&times, times.sunset(), "sunset");
            }
            Input::JumpSolarNoon => {
                let times = ephemeris.day_times(self.clock.with_timezone(&Utc), self.geo)?;
                self.jump_to(&times, Some(times.solar_noon()), "solar noon");
            }
            Input::Quit => return Ok(Control::Quit),
        }
        Ok(Control::Continue)
    }

    /// Advances the clock by one repeat if a step is in progress.
    ///
    /// Returns whether the clock moved. The repeat length is taken from the
    /// mode selected at the time of the tick.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the clock would leave the representable range.
    pub fn advance(&mut self) -> Result<bool> {
        let delta = self.mode().tick_delta();
        let next = match self.counter.signum() {
            1 => self.clock.checked_add_signed(delta),
            -1 => self.clock.checked_sub_signed(delta),
            _ => return Ok(false),
        };
        self.clock = next.ok_or_else(|| Error::invalid_datetime("simulated time out of range"))?;
        self.counter -= self.counter.signum();
        if self.counter == 0 {
            debug!("step finished at {}", self.clock);
        }
        Ok(true)
    }

    fn repeats(&self) -> i32 {
        i32::try_from(self.mode().repeats).unwrap_or(i32::MAX)
    }

    fn jump_to(&mut self, times: &DayTimes, target: Option<DateTime<Utc>>, label: &str) {
        if let Some(instant) = target {
            self.clock = instant.with_timezone(&self.clock.timezone());
            info!("Jump to {label} {}", self.clock);
            return;
        }
        let reason = match times.for_horizon(Horizon::SunriseSunset) {
            Some(day) if day.is_polar_day() => "polar day",
            Some(day) if day.is_polar_night() => "polar night",
            _ => "no event",
        };
        warn!("no {label} on {} ({reason})", self.clock.date_naive());
    }
}
