// THEORY:
// The landmark model is an external collaborator. The tracker never needs to
// know whether it runs in-process, behind a helper process, or is a scripted
// fake in a test: it only needs "give me the hands in this RGB image". That
// capability is the `HandLandmarker` trait.
//
// The four scalar model options travel together as `DetectorConfig`. They are
// checked once, before a model session is started, and are immutable after.

use crate::core_modules::landmark::Hand;
use crate::error::{Error, Result};
use image::RgbImage;

/// Options forwarded verbatim to the landmark model.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    /// Treat every frame as an unrelated still image instead of tracking across frames.
    pub static_image_mode: bool,
    /// Upper bound on the number of hands reported per frame.
    pub max_num_hands: u32,
    /// Minimum palm detection score for a hand to be reported.
    pub min_detection_confidence: f32,
    /// Minimum landmark tracking score before the model falls back to detection.
    pub min_tracking_confidence: f32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            static_image_mode: false,
            max_num_hands: 2,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
        }
    }
}

impl DetectorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_num_hands == 0 {
            return Err(Error::InvalidConfig(
                "max_num_hands must be at least 1".into(),
            ));
        }
        for (name, value) in [
            ("min_detection_confidence", self.min_detection_confidence),
            ("min_tracking_confidence", self.min_tracking_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// The hands found in a single frame, in model order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectionResult {
    pub hands: Vec<Hand>,
}

impl DetectionResult {
    pub fn new(hands: Vec<Hand>) -> Self {
        Self { hands }
    }

    pub fn hand_count(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}

/// A hand-landmark model session.
pub trait HandLandmarker {
    /// Runs the model on an RGB image.
    fn detect(&mut self, image: &RgbImage) -> Result<DetectionResult>;
}

impl<L: HandLandmarker + ?Sized> HandLandmarker for Box<L> {
    fn detect(&mut self, image: &RgbImage) -> Result<DetectionResult> {
        (**self).detect(image)
    }
}
