// THEORY:
// Landmarks come in two flavours. The model speaks in `NormalizedLandmark`s,
// fractions of the image width and height (plus a relative depth). The rest of
// the application speaks in `Landmark`s, integer pixel positions tagged with
// their index inside the hand. `denormalize` is the single bridge between them.
//
// The hand topology (which landmark is which, and which pairs form the
// skeleton) is fixed by the model and lives here as constants.

use serde::{Deserialize, Serialize};

/// Number of landmarks the MediaPipe hand model produces per hand.
pub const NUM_LANDMARKS: usize = 21;

/// A landmark as reported by the model, normalized to `[0, 1]` of the image size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedLandmark {
    pub x: f32,
    pub y: f32,
    /// Depth relative to the wrist. Smaller is closer to the camera.
    #[serde(default)]
    pub z: f32,
}

impl NormalizedLandmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Converts to pixel coordinates for an image of the given size.
    pub fn denormalize(&self, width: u32, height: u32) -> (i32, i32) {
        (
            (self.x as f64 * width as f64).round() as i32,
            (self.y as f64 * height as f64).round() as i32,
        )
    }
}

/// One detected hand: its landmarks in model order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    pub landmarks: Vec<NormalizedLandmark>,
}

impl Hand {
    pub fn new(landmarks: Vec<NormalizedLandmark>) -> Self {
        Self { landmarks }
    }

    pub fn landmark(&self, idx: LandmarkIdx) -> Option<&NormalizedLandmark> {
        self.landmarks.get(idx as usize)
    }
}

/// A landmark in pixel space. Recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Landmark {
    /// Index of the landmark within its hand, `0..NUM_LANDMARKS`.
    pub id: usize,
    /// Pixel column.
    pub x: i32,
    /// Pixel row.
    pub y: i32,
}

/// Names for the hand landmarks, in model order.
///
/// CMC is the lowest thumb joint near the wrist, MCP the knuckle joint, PIP the
/// middle finger joint, DIP the top joint and Tip the fingertip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkIdx {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

/// The segments drawn to visualize the hand skeleton.
pub const HAND_CONNECTIONS: &[(LandmarkIdx, LandmarkIdx)] = {
    use LandmarkIdx::*;
    &[
        // Palm
        (Wrist, ThumbCmc),
        (Wrist, IndexFingerMcp),
        (IndexFingerMcp, MiddleFingerMcp),
        (MiddleFingerMcp, RingFingerMcp),
        (RingFingerMcp, PinkyMcp),
        (Wrist, PinkyMcp),
        // Thumb
        (ThumbCmc, ThumbMcp),
        (ThumbMcp, ThumbIp),
        (ThumbIp, ThumbTip),
        // Index
        (IndexFingerMcp, IndexFingerPip),
        (IndexFingerPip, IndexFingerDip),
        (IndexFingerDip, IndexFingerTip),
        // Middle
        (MiddleFingerMcp, MiddleFingerPip),
        (MiddleFingerPip, MiddleFingerDip),
        (MiddleFingerDip, MiddleFingerTip),
        // Ring
        (RingFingerMcp, RingFingerPip),
        (RingFingerPip, RingFingerDip),
        (RingFingerDip, RingFingerTip),
        // Pinky
        (PinkyMcp, PinkyPip),
        (PinkyPip, PinkyDip),
        (PinkyDip, PinkyTip),
    ]
};
