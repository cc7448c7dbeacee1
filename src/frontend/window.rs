use super::WINDOW_TITLE;
use crate::controller::{Input, Phase};
use crate::projector::{Frame, Screen, SkyProjector};
use crate::session::Frontend;
use crate::types::Body;
use crate::{Error, Result};
use ::raylib::prelude::*;

/// Moon is the brighter of the two bodies, the sun the dimmer.
const MOON_COLOR: Color = Color::new(255, 255, 255, 255);
const SUN_COLOR: Color = Color::new(255, 255, 255, 128);
const OBSERVER_COLOR: Color = Color::new(0, 121, 241, 200);
const HORIZON_COLOR: Color = Color::GREEN;

/// Desktop window drawn with raylib.
pub struct RaylibFrontend {
    rl: RaylibHandle,
    thread: RaylibThread,
    screen: Screen,
    sun_diameter: i32,
    moon_diameter: i32,
    observer_diameter: i32,
}

impl RaylibFrontend {
    /// Opens the window sized for `projector`'s screen.
    ///
    /// # Errors
    /// Returns `RenderSurface` if no window could be created.
    pub fn open(projector: &SkyProjector) -> Result<Self> {
        let screen = projector.screen();
        let (mut rl, thread) = ::raylib::init()
            .size(screen.width, screen.height)
            .title(WINDOW_TITLE)
            .build();

        if !rl.is_window_ready() {
            return Err(Error::render_surface("raylib could not open a window"));
        }

        // Escape is handled as a regular input so the session can log the quit.
        rl.set_exit_key(None);
        rl.set_target_fps(60);

        Ok(Self {
            rl,
            thread,
            screen,
            sun_diameter: projector.diameter(Body::Sun),
            moon_diameter: projector.diameter(Body::Moon),
            observer_diameter: projector.observer_diameter(),
        })
    }
}

fn map_key(key: KeyboardKey) -> Option<Input> {
    match key {
        KeyboardKey::KEY_RIGHT => Some(Input::StepForward),
        KeyboardKey::KEY_LEFT => Some(Input::StepBackward),
        KeyboardKey::KEY_UP => Some(Input::ModeUp),
        KeyboardKey::KEY_DOWN => Some(Input::ModeDown),
        KeyboardKey::KEY_R => Some(Input::JumpSunrise),
        KeyboardKey::KEY_S => Some(Input::JumpSunset),
        KeyboardKey::KEY_N => Some(Input::JumpSolarNoon),
        KeyboardKey::KEY_ESCAPE => Some(Input::Quit),
        _ => None,
    }
}

impl Frontend for RaylibFrontend {
    fn poll_inputs(&mut self) -> Vec<Input> {
        let mut inputs = Vec::new();
        while let Some(key) = self.rl.get_key_pressed() {
            if let Some(input) = map_key(key) {
                inputs.push(input);
            }
        }
        inputs
    }

    fn present(&mut self, frame: &Frame, caption: &str, _phase: Phase) -> Result<()> {
        self.rl.set_window_title(&self.thread, caption);

        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(Color::BLACK);

        d.draw_line(
            0,
            frame.horizon_y,
            self.screen.width,
            frame.horizon_y,
            HORIZON_COLOR,
        );
        d.draw_rectangle(
            frame.observer.x,
            frame.observer.y,
            self.observer_diameter,
            self.observer_diameter,
            OBSERVER_COLOR,
        );

        // Sprite origins are top-left; raylib circles are centred.
        let sun_r = self.sun_diameter / 2;
        d.draw_circle(
            frame.sun.x + sun_r,
            frame.sun.y + sun_r,
            sun_r as f32,
            SUN_COLOR,
        );
        let moon_r = self.moon_diameter / 2;
        d.draw_circle(
            frame.moon.x + moon_r,
            frame.moon.y + moon_r,
            moon_r as f32,
            MOON_COLOR,
        );
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.rl.window_should_close()
    }
}
