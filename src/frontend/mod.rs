//! Front-ends: translate native events into [`Input`](crate::Input)s and draw frames.

mod headless;
#[cfg(feature = "raylib")]
mod window;

pub use headless::{HeadlessFrontend, PresentedFrame};
#[cfg(feature = "raylib")]
pub use window::RaylibFrontend;

/// Title of the window.
pub const WINDOW_TITLE: &str = "Eclipse";
