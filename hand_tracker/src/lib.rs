// THEORY:
// This file is the entry point for the `hand_tracker` library crate. It exposes
// the `HandTracker` adapter (frames in, pixel-space landmarks out), the
// `HandLandmarker` capability that hides the concrete model, and the
// interactive `session` loop that drives them frame by frame.
//
// The building blocks (`Frame`, landmarks, drawing, FPS, key handling and the
// helper-process model bridge) live in `core_modules`. The commonly used types
// are re-exported here so binaries only need `hand_tracker::...`.

pub mod core_modules;
pub mod error;
pub mod pipeline;
pub mod session;

pub use core_modules::bridge::{BridgeConfig, SubprocessLandmarker};
pub use core_modules::frame::Frame;
pub use core_modules::landmark::{Hand, Landmark, NormalizedLandmark};
pub use core_modules::landmarker::{DetectionResult, DetectorConfig, HandLandmarker};
pub use error::{Error, Result};
pub use pipeline::HandTracker;
