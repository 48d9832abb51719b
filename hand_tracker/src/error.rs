// THEORY:
// Every failure the tracker can surface is a variant of one enum. The two
// fatal runtime conditions of the viewer (the camera stops delivering frames,
// and a caller asks for a hand that was not detected) are kept as separate
// kinds so that callers can match on them and react differently.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("error reading the frame: {0}")]
    FrameRead(String),

    #[error("hand index {index} out of range ({detected} hand(s) detected)")]
    HandIndexOutOfRange { index: usize, detected: usize },

    #[error("invalid detector configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid frame: expected {expected} bytes for {width}x{height} BGR, got {actual}")]
    InvalidFrame {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("failed to start the landmark model: {0}")]
    ModelInit(String),

    #[error("landmark model error: {0}")]
    Model(String),

    #[error("display error: {0}")]
    Display(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed model response: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
