// THEORY:
// Instantaneous frame rate: the reciprocal of the wall-clock time between two
// consecutive frames. No smoothing; the number on screen jumps with every frame.

use std::time::{Duration, Instant};

/// Tracks the timestamp of the previous frame.
#[derive(Debug, Clone, Copy)]
pub struct FpsMeter {
    previous: Instant,
}

impl FpsMeter {
    /// Starts measuring from `start`. The first tick is measured against it.
    pub fn new(start: Instant) -> Self {
        Self { previous: start }
    }

    /// Records a frame at `now` and returns the instantaneous FPS.
    pub fn tick(&mut self, now: Instant) -> f64 {
        let fps = fps_from_interval(now.saturating_duration_since(self.previous));
        self.previous = now;
        fps
    }
}

/// `1 / dt`. A zero interval yields infinity.
pub fn fps_from_interval(dt: Duration) -> f64 {
    1.0 / dt.as_secs_f64()
}

/// The text shown on screen, e.g. `FPS: 50`.
pub fn fps_label(fps: f64) -> String {
    // Float-to-int casts saturate, so an infinite rate prints as i64::MAX.
    format!("FPS: {}", fps.round() as i64)
}
