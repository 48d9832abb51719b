// THEORY:
// The `session` module is the interactive per-frame loop. It owns the only
// mutable UI state of the viewer (the two drawing toggles and the previous
// frame timestamp) as plain locals, and talks to the outside world through two
// small traits:
//
// - `FrameSource`: anything that produces BGR frames (a webcam, a file, a test fake).
// - `Window`: anything that can show a frame with a text overlay and report a key press.
//
// Each iteration: read a frame, poll a key, run detection and landmark
// extraction with the current toggles, stamp the FPS and show the frame. The
// loop ends on the exit key or on the first error.

use crate::core_modules::fps::{FpsMeter, fps_label};
use crate::core_modules::frame::{Bgr, Frame};
use crate::core_modules::keys::{Key, Toggles};
use crate::core_modules::landmarker::HandLandmarker;
use crate::error::Result;
use crate::pipeline::HandTracker;
use std::time::Instant;
use tracing::{debug, info};

pub const WINDOW_TITLE: &str = "Hand Tracker";
/// How long to wait for a key press each frame, in milliseconds.
pub const KEY_POLL_DELAY_MS: i32 = 1;
/// The hand whose landmarks are extracted every frame.
pub const PRIMARY_HAND: usize = 0;

/// A line of text to render on top of a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOverlay {
    pub text: String,
    /// Bottom-left corner of the text, in pixels.
    pub origin: (i32, i32),
    pub scale: f64,
    pub color: Bgr,
    pub thickness: i32,
}

impl TextOverlay {
    /// The FPS counter in its fixed on-screen style.
    pub fn fps(fps: f64) -> Self {
        Self {
            text: fps_label(fps),
            origin: (10, 70),
            scale: 2.0,
            color: [0, 250, 0],
            thickness: 2,
        }
    }
}

/// A producer of camera frames. Blocks until a frame is available.
pub trait FrameSource {
    /// Returns the next frame, or `Error::FrameRead` when the device fails.
    fn read(&mut self) -> Result<Frame>;
}

/// An on-screen window with keyboard input.
pub trait Window {
    /// Waits up to `delay_ms` for a key press and returns its code, if any.
    fn poll_key(&mut self, delay_ms: i32) -> Result<Option<i32>>;

    /// Renders `overlay` on top of `frame` and displays it.
    fn show(&mut self, frame: &Frame, overlay: &TextOverlay) -> Result<()>;
}

/// Runs the viewer until the exit key is pressed. Returns the number of
/// frames that were displayed.
pub fn run<L, S, W>(tracker: &mut HandTracker<L>, source: &mut S, window: &mut W) -> Result<u64>
where
    L: HandLandmarker,
    S: FrameSource,
    W: Window,
{
    let mut toggles = Toggles::default();
    let mut fps = FpsMeter::new(Instant::now());
    let mut shown = 0u64;

    loop {
        let mut frame = source.read()?;

        let key = Key::from_code(window.poll_key(KEY_POLL_DELAY_MS)?);
        if !toggles.apply(key) {
            break;
        }
        if key != Key::Other {
            debug!(?key, ?toggles, "key pressed");
        }

        tracker.find_hands(&mut frame, toggles.draw_skeleton)?;
        if tracker.hand_count() > PRIMARY_HAND {
            tracker.find_position(&mut frame, PRIMARY_HAND, toggles.draw_points)?;
        }

        let overlay = TextOverlay::fps(fps.tick(Instant::now()));
        window.show(&frame, &overlay)?;
        shown += 1;
    }

    info!(frames = shown, "exit key pressed, stopping");
    Ok(shown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_overlay_has_fixed_style() {
        let overlay = TextOverlay::fps(50.0);
        assert_eq!(overlay.text, "FPS: 50");
        assert_eq!(overlay.origin, (10, 70));
        assert_eq!(overlay.color, [0, 250, 0]);
        assert_eq!(overlay.thickness, 2);
    }
}
