// THEORY:
// The pretrained hand model ships as a Python package, so the concrete
// `HandLandmarker` runs it in a helper process and talks to it over pipes.
//
// Protocol:
// 1.  **Startup**: the helper receives the `DetectorConfig` as command-line
//     flags, builds its model session and prints `READY` on stdout. Anything
//     else on the first line means the model could not be initialized.
// 2.  **Request**: a 12-byte little-endian header `(width, height, channels)`
//     as `u32`s, followed by the raw RGB bytes of the image.
// 3.  **Response**: one JSON line, `{"hands": [[{"x":..,"y":..,"z":..}, ...]], "error": null}`.
//
// The helper lives exactly as long as the landmarker; dropping the landmarker
// kills it.

use crate::core_modules::landmark::Hand;
use crate::core_modules::landmarker::{DetectionResult, DetectorConfig, HandLandmarker};
use crate::error::{Error, Result};
use image::RgbImage;
use serde::Deserialize;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use tracing::{debug, info, warn};

const READY_SIGNAL: &str = "READY";
const RGB_CHANNELS: u32 = 3;

/// Where to find the helper process that hosts the model.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    /// The interpreter used to run the helper script.
    pub interpreter: PathBuf,
    /// The helper script itself.
    pub script: PathBuf,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            interpreter: PathBuf::from("python3"),
            script: PathBuf::from("bridge/mediapipe_hands.py"),
        }
    }
}

#[derive(Deserialize, Debug)]
struct BridgeResponse {
    #[serde(default)]
    hands: Vec<Hand>,
    #[serde(default)]
    error: Option<String>,
}

/// A `HandLandmarker` backed by the MediaPipe helper process.
pub struct SubprocessLandmarker {
    process: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    line: String,
}

impl SubprocessLandmarker {
    /// Starts the helper process and waits for it to report readiness.
    pub fn spawn(bridge: &BridgeConfig, config: &DetectorConfig) -> Result<Self> {
        if !bridge.script.exists() {
            return Err(Error::ModelInit(format!(
                "helper script not found at {}",
                bridge.script.display()
            )));
        }

        info!(
            interpreter = %bridge.interpreter.display(),
            script = %bridge.script.display(),
            "starting hand landmark helper"
        );

        let mut process = Command::new(&bridge.interpreter)
            .arg(&bridge.script)
            .args(model_args(config))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                Error::ModelInit(format!(
                    "failed to launch {}: {e}",
                    bridge.interpreter.display()
                ))
            })?;

        let (Some(stdin), Some(stdout)) = (process.stdin.take(), process.stdout.take()) else {
            let _ = process.kill();
            return Err(Error::ModelInit("helper pipes unavailable".into()));
        };

        let mut landmarker = Self {
            process,
            stdin,
            stdout: BufReader::new(stdout),
            line: String::new(),
        };

        let ready = landmarker.read_line()?;
        if ready.trim() != READY_SIGNAL {
            return Err(Error::ModelInit(format!(
                "helper did not signal ready, got {:?}",
                ready.trim()
            )));
        }

        info!("hand landmark helper ready");
        Ok(landmarker)
    }

    fn read_line(&mut self) -> Result<&str> {
        self.line.clear();
        if self.stdout.read_line(&mut self.line)? == 0 {
            return Err(Error::Model("helper process exited".into()));
        }
        Ok(&self.line)
    }
}

impl HandLandmarker for SubprocessLandmarker {
    fn detect(&mut self, image: &RgbImage) -> Result<DetectionResult> {
        write_request(&mut self.stdin, image)?;
        let line = self.read_line()?.to_owned();
        let result = parse_response(&line)?;
        debug!(hands = result.hand_count(), "detection complete");
        Ok(result)
    }
}

impl Drop for SubprocessLandmarker {
    fn drop(&mut self) {
        if let Err(e) = self.process.kill() {
            debug!("helper already gone: {e}");
        }
        let _ = self.process.wait();
    }
}

/// Command-line flags that carry the model options to the helper.
pub fn model_args(config: &DetectorConfig) -> Vec<String> {
    let mut args = vec![
        "--max-num-hands".to_string(),
        config.max_num_hands.to_string(),
        "--min-detection-confidence".to_string(),
        config.min_detection_confidence.to_string(),
        "--min-tracking-confidence".to_string(),
        config.min_tracking_confidence.to_string(),
    ];
    if config.static_image_mode {
        args.push("--static-image-mode".to_string());
    }
    args
}

/// Writes one frame request: header followed by the RGB payload.
pub fn write_request<W: Write>(writer: &mut W, image: &RgbImage) -> Result<()> {
    writer.write_all(&image.width().to_le_bytes())?;
    writer.write_all(&image.height().to_le_bytes())?;
    writer.write_all(&RGB_CHANNELS.to_le_bytes())?;
    writer.write_all(image.as_raw())?;
    writer.flush()?;
    Ok(())
}

/// Parses one response line from the helper.
pub fn parse_response(line: &str) -> Result<DetectionResult> {
    let response: BridgeResponse = serde_json::from_str(line.trim())?;
    if let Some(error) = response.error {
        warn!("helper reported: {error}");
        return Err(Error::Model(error));
    }
    Ok(DetectionResult::new(response.hands))
}
