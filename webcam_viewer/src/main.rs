use anyhow::Context;
use hand_tracker::session::{self, WINDOW_TITLE};
use hand_tracker::{BridgeConfig, DetectorConfig, HandTracker, SubprocessLandmarker};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod opencv_io;

use opencv_io::{Camera, HighGuiWindow};

const DEFAULT_CAMERA: i32 = 0;

fn main() -> anyhow::Result<()> {
    // --- 1. Logging ---
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // --- 2. Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        println!("Usage: webcam_viewer [camera_index] [bridge_script]");
        println!("Keys: ESC quit, SPACE toggle skeleton, TAB toggle points");
        return Ok(());
    }
    let camera_index = match args.get(1) {
        Some(arg) => arg
            .parse::<i32>()
            .with_context(|| format!("invalid camera index {arg:?}"))?,
        None => DEFAULT_CAMERA,
    };
    let mut bridge = BridgeConfig::default();
    if let Some(script) = args.get(2) {
        bridge.script = PathBuf::from(script);
    }

    // --- 3. Model Initialization ---
    let config = DetectorConfig {
        static_image_mode: false, // Track hands across frames instead of re-detecting every frame.
        max_num_hands: 2,
        min_detection_confidence: 0.5,
        min_tracking_confidence: 0.5,
    };
    let mut tracker = HandTracker::new(config, |config| {
        SubprocessLandmarker::spawn(&bridge, config)
    })?;

    // --- 4. Camera & Window ---
    let mut camera = Camera::open(camera_index)?;
    let mut window = HighGuiWindow::open(WINDOW_TITLE)?;

    // --- 5. Main Loop ---
    let frames = session::run(&mut tracker, &mut camera, &mut window)?;

    info!(frames, "viewer closed");
    Ok(())
}
