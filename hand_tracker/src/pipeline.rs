// THEORY:
// The `pipeline` module is the top-level API of the tracker. `HandTracker`
// turns raw camera frames into pixel-space landmarks in two steps per frame:
//
// 1.  `find_hands` converts the frame to the model's channel order, runs the
//     model and keeps the result. Optionally it paints the skeleton.
// 2.  `find_position` reads that stored result for one hand, denormalizes its
//     landmarks against the frame size and optionally paints a marker on each.
//
// The stored `DetectionResult` is overwritten on every `find_hands` call; the
// tracker has no memory beyond the current frame.

use crate::core_modules::draw::{self, MARKER_COLOR, MARKER_RADIUS};
use crate::core_modules::frame::Frame;
use crate::core_modules::landmarker::HandLandmarker;
use crate::error::{Error, Result};
use tracing::trace;

pub use crate::core_modules::landmark::{Landmark, NormalizedLandmark};
pub use crate::core_modules::landmarker::{DetectionResult, DetectorConfig};

/// Adapter between camera frames and a hand-landmark model.
pub struct HandTracker<L> {
    config: DetectorConfig,
    landmarker: L,
    /// Result of the most recent `find_hands` call, `None` before the first one.
    results: Option<DetectionResult>,
}

impl<L: HandLandmarker> HandTracker<L> {
    /// Validates `config` and starts a model session with it.
    ///
    /// Errors from `init` are returned unchanged.
    pub fn new<F>(config: DetectorConfig, init: F) -> Result<Self>
    where
        F: FnOnce(&DetectorConfig) -> Result<L>,
    {
        config.validate()?;
        let landmarker = init(&config)?;
        Ok(Self {
            config,
            landmarker,
            results: None,
        })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// The detection stored by the last `find_hands` call.
    pub fn last_detection(&self) -> Option<&DetectionResult> {
        self.results.as_ref()
    }

    /// Number of hands found by the last `find_hands` call.
    pub fn hand_count(&self) -> usize {
        self.results.as_ref().map_or(0, DetectionResult::hand_count)
    }

    /// Runs the model on `frame` and stores the result. With `draw`, the
    /// skeleton of every detected hand is painted onto `frame`.
    pub fn find_hands(&mut self, frame: &mut Frame, draw: bool) -> Result<&DetectionResult> {
        let rgb = frame.to_rgb_image();
        let results = self.landmarker.detect(&rgb)?;
        trace!(hands = results.hand_count(), "hands detected");

        if draw {
            for hand in &results.hands {
                draw::draw_hand_skeleton(frame, hand);
            }
        }

        Ok(&*self.results.insert(results))
    }

    /// Returns the pixel-space landmarks of hand `hand_index` from the last
    /// detection, in model order. With `draw`, a filled marker is painted on
    /// each landmark.
    ///
    /// Fails with `Error::HandIndexOutOfRange` when fewer than `hand_index + 1`
    /// hands were detected; nothing is drawn in that case.
    pub fn find_position(
        &self,
        frame: &mut Frame,
        hand_index: usize,
        draw: bool,
    ) -> Result<Vec<Landmark>> {
        let detected = self.hand_count();
        let hand = self
            .results
            .as_ref()
            .and_then(|results| results.hands.get(hand_index))
            .ok_or(Error::HandIndexOutOfRange {
                index: hand_index,
                detected,
            })?;

        let (width, height) = (frame.width(), frame.height());
        let mut landmarks = Vec::with_capacity(hand.landmarks.len());
        for (id, lm) in hand.landmarks.iter().enumerate() {
            let (x, y) = lm.denormalize(width, height);
            landmarks.push(Landmark { id, x, y });

            if draw {
                draw::fill_circle(frame, (x, y), MARKER_RADIUS, MARKER_COLOR);
            }
        }

        Ok(landmarks)
    }
}
