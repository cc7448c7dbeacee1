use crate::controller::{Input, Phase};
use crate::projector::Frame;
use crate::session::Frontend;
use crate::types::HorizontalPosition;
use crate::Result;
use log::info;
use std::collections::VecDeque;
use std::time::Duration;

/// A frame as it was handed to the front-end.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedFrame {
    /// Title text at the time.
    pub caption: String,
    /// Projected positions.
    pub frame: Frame,
    /// Phase after the tick.
    pub phase: Phase,
}

/// Window-less front-end driven by a fixed input script.
///
/// Each scripted input is released only once the previous step has finished,
/// so a script like `right,right` moves the clock two whole steps. When the
/// script runs out the front-end asks to quit. Idle back-off is skipped.
#[derive(Debug, Clone)]
pub struct HeadlessFrontend {
    script: VecDeque<Input>,
    frames: Vec<PresentedFrame>,
    max_frames: usize,
    idle: bool,
}

impl HeadlessFrontend {
    /// Creates a front-end replaying `script`, closing after `max_frames` frames.
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = Input>, max_frames: usize) -> Self {
        Self {
            script: script.into_iter().collect(),
            frames: Vec::new(),
            max_frames,
            idle: true,
        }
    }

    /// Every frame presented so far.
    #[must_use]
    pub fn frames(&self) -> &[PresentedFrame] {
        &self.frames
    }

    /// The most recent frame.
    #[must_use]
    pub fn last_frame(&self) -> Option<&PresentedFrame> {
        self.frames.last()
    }
}

impl Frontend for HeadlessFrontend {
    fn poll_inputs(&mut self) -> Vec<Input> {
        if !self.idle {
            return Vec::new();
        }
        vec![self.script.pop_front().unwrap_or(Input::Quit)]
    }

    fn present(&mut self, frame: &Frame, caption: &str, phase: Phase) -> Result<()> {
        self.idle = phase == Phase::Idle;
        if self.idle {
            info!(
                "{caption}: sun {} at ({}, {}), moon {} at ({}, {}), horizon {}",
                describe(frame.sun_position),
                frame.sun.x,
                frame.sun.y,
                describe(frame.moon_position),
                frame.moon.x,
                frame.moon.y,
                frame.horizon_y
            );
        }
        self.frames.push(PresentedFrame {
            caption: caption.to_owned(),
            frame: *frame,
            phase,
        });
        Ok(())
    }

    fn idle(&mut self, _delay: Duration) {}

    fn is_closed(&self) -> bool {
        self.frames.len() >= self.max_frames
    }
}

/// Compass bearing and altitude in degrees, e.g. `az 135.2° alt +40.1° (up)`.
fn describe(position: HorizontalPosition) -> String {
    format!(
        "az {:.1}° alt {:+.1}° ({})",
        position.bearing_degrees(),
        position.altitude_degrees(),
        if position.is_up() { "up" } else { "down" }
    )
}
