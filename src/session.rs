//! Tick-driven session loop shared by every front-end.
//!
//! One iteration: drain inputs, advance the clock by at most one repeat,
//! re-project the sky, hand the frame to the front-end. When no step is
//! running the front-end is asked to back off for [`IDLE_DELAY`].

use crate::controller::{Control, Input, Phase, SimulationState};
use crate::ephemeris::Ephemeris;
use crate::projector::{Frame, SkyProjector};
use crate::Result;
use chrono::Utc;
use log::{debug, info};
use std::time::Duration;

/// Back-off between frames while nothing is moving.
pub const IDLE_DELAY: Duration = Duration::from_millis(250);

/// Input source and output sink for a session.
pub trait Frontend {
    /// Inputs received since the last call, oldest first.
    fn poll_inputs(&mut self) -> Vec<Input>;

    /// Draws a frame.
    ///
    /// # Errors
    /// Returns `RenderSurface` if the frame cannot be shown.
    fn present(&mut self, frame: &Frame, caption: &str, phase: Phase) -> Result<()>;

    /// Waits before the next frame while the simulation is idle.
    fn idle(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }

    /// Whether the user closed the surface.
    fn is_closed(&self) -> bool {
        false
    }
}

/// Simulation state plus the collaborators needed to tick and project it.
#[derive(Debug)]
pub struct Session<E: Ephemeris> {
    state: SimulationState,
    ephemeris: E,
    projector: SkyProjector,
    frame: Frame,
}

impl<E: Ephemeris> Session<E> {
    /// Creates a session and projects its first frame.
    ///
    /// # Errors
    /// Fails fast if the ephemeris cannot answer for the starting state.
    pub fn new(state: SimulationState, ephemeris: E, projector: SkyProjector) -> Result<Self> {
        let frame = projector.project(&ephemeris, state.clock().with_timezone(&Utc), state.geo())?;
        Ok(Self {
            state,
            ephemeris,
            projector,
            frame,
        })
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Frame matching the current state as of the last tick.
    #[must_use]
    pub const fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Projector in use.
    #[must_use]
    pub const fn projector(&self) -> &SkyProjector {
        &self.projector
    }

    /// Applies one input.
    ///
    /// # Errors
    /// Propagates ephemeris failures from jump inputs.
    pub fn handle_input(&mut self, input: Input) -> Result<Control> {
        self.state.apply(input, &self.ephemeris)
    }

    /// Advances by one repeat (if stepping) and re-projects the sky.
    ///
    /// # Errors
    /// Any failure here is a logic error and aborts the session.
    pub fn tick(&mut self) -> Result<&Frame> {
        self.state.advance()?;
        self.frame = self.projector.project(
            &self.ephemeris,
            self.state.clock().with_timezone(&Utc),
            self.state.geo(),
        )?;
        debug!(
            "tick {} sun=({}, {}) moon=({}, {}) horizon={}",
            self.state.clock(),
            self.frame.sun.x,
            self.frame.sun.y,
            self.frame.moon.x,
            self.frame.moon.y,
            self.frame.horizon_y
        );
        Ok(&self.frame)
    }

    /// How long to back off before the next frame, if at all.
    #[must_use]
    pub fn idle_delay(&self) -> Option<Duration> {
        match self.state.phase() {
            Phase::Idle => Some(IDLE_DELAY),
            Phase::Stepping => None,
        }
    }
}

/// Runs the session until a quit input or the front-end closes.
///
/// # Errors
/// Returns the first ephemeris or render failure; nothing is retried.
pub fn run<E: Ephemeris, F: Frontend>(session: &mut Session<E>, frontend: &mut F) -> Result<()> {
    info!(
        "starting at {} ({:.6}, {:.6}), step {}",
        session.state().clock(),
        session.state().geo().latitude(),
        session.state().geo().longitude(),
        session.state().mode().name
    );

    while !frontend.is_closed() {
        for input in frontend.poll_inputs() {
            if session.handle_input(input)? == Control::Quit {
                info!("quit requested");
                return Ok(());
            }
        }

        session.tick()?;
        let caption = session.state().caption();
        frontend.present(session.frame(), &caption, session.state().phase())?;

        if let Some(delay) = session.idle_delay() {
            frontend.idle(delay);
        }
    }

    info!("window closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suncalc::SunCalc;
    use crate::types::GeoCoordinate;
    use crate::Error;
    use chrono::{DateTime, TimeDelta, TimeZone};
    use chrono_tz::America::Denver;

    fn session() -> Session<SunCalc> {
        let geo = GeoCoordinate::new(43.833333, -110.700833).unwrap();
        let clock = Denver.with_ymd_and_hms(2017, 8, 21, 10, 36, 0).unwrap();
        let state = SimulationState::new(geo, clock, 1).unwrap();
        Session::new(state, SunCalc, SkyProjector::default()).unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        queued: Vec<Vec<Input>>,
        presented: Vec<String>,
        idles: usize,
    }

    impl Frontend for Recorder {
        fn poll_inputs(&mut self) -> Vec<Input> {
            if self.queued.is_empty() {
                vec![Input::Quit]
            } else {
                self.queued.remove(0)
            }
        }

        fn present(&mut self, _frame: &Frame, caption: &str, _phase: Phase) -> Result<()> {
            self.presented.push(caption.to_owned());
            Ok(())
        }

        fn idle(&mut self, _delay: Duration) {
            self.idles += 1;
        }
    }

    #[test]
    fn test_idle_delay_follows_phase() {
        let mut session = session();
        assert_eq!(session.idle_delay(), Some(IDLE_DELAY));

        session.handle_input(Input::StepForward).unwrap();
        assert_eq!(session.idle_delay(), None);
    }

    #[test]
    fn test_tick_keeps_frame_in_sync() {
        let mut session = session();
        session.handle_input(Input::JumpSunset).unwrap();
        let frame = *session.tick().unwrap();

        let expected = session
            .projector()
            .project(
                &SunCalc,
                session.state().clock().with_timezone(&Utc),
                session.state().geo(),
            )
            .unwrap();
        assert_eq!(frame, expected);
    }

    #[test]
    fn test_run_until_quit() {
        let mut session = session();
        let mut frontend = Recorder {
            queued: vec![vec![Input::ModeUp], vec![]],
            ..Recorder::default()
        };

        run(&mut session, &mut frontend).unwrap();

        assert_eq!(frontend.presented.len(), 2);
        assert!(frontend.presented[0].ends_with("1 Day"));
        assert_eq!(frontend.idles, 2);
    }

    struct BrokenSurface {
        presents: usize,
        idles: usize,
    }

    impl Frontend for BrokenSurface {
        fn poll_inputs(&mut self) -> Vec<Input> {
            Vec::new()
        }

        fn present(&mut self, _frame: &Frame, _caption: &str, _phase: Phase) -> Result<()> {
            self.presents += 1;
            Err(Error::render_surface("display lost"))
        }

        fn idle(&mut self, _delay: Duration) {
            self.idles += 1;
        }
    }

    #[test]
    fn test_present_failure_aborts_run() {
        let mut session = session();
        let mut frontend = BrokenSurface {
            presents: 0,
            idles: 0,
        };

        let err = run(&mut session, &mut frontend).unwrap_err();

        assert_eq!(err, Error::render_surface("display lost"));
        assert_eq!(frontend.presents, 1);
        assert_eq!(frontend.idles, 0);
    }

    #[test]
    fn test_tick_past_end_of_time_fails() {
        let mut session = session();
        let clock = (DateTime::<Utc>::MAX_UTC - TimeDelta::days(100)).with_timezone(&chrono_tz::UTC);
        session.state = SimulationState::new(session.state.geo(), clock, 5).unwrap();
        session.handle_input(Input::StepForward).unwrap();

        let err = session.tick().unwrap_err();

        assert!(matches!(err, Error::InvalidDateTime { .. }), "{err:?}");
        assert_eq!(*session.state().clock(), clock);
        assert_eq!(session.state().counter(), 5);
    }
}
