use hand_tracker::core_modules::draw::{CONNECTION_COLOR, MARKER_COLOR};
use hand_tracker::core_modules::keys::{ESC, SPACE, TAB};
use hand_tracker::core_modules::landmark::NUM_LANDMARKS;
use hand_tracker::session::{self, FrameSource, TextOverlay, Window};
use hand_tracker::{
    DetectionResult, DetectorConfig, Error, Frame, Hand, HandLandmarker, HandTracker,
    NormalizedLandmark, Result,
};
use image::RgbImage;
use std::collections::VecDeque;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;
const BLACK: [u8; 3] = [0, 0, 0];

struct FixedModel {
    hands: Vec<Hand>,
    fail: bool,
}

impl HandLandmarker for FixedModel {
    fn detect(&mut self, _image: &RgbImage) -> Result<DetectionResult> {
        if self.fail {
            return Err(Error::Model("model crashed".into()));
        }
        Ok(DetectionResult::new(self.hands.clone()))
    }
}

struct Camera {
    frames: VecDeque<Frame>,
}

impl Camera {
    fn with_frames(count: usize) -> Self {
        Self {
            frames: (0..count).map(|_| Frame::filled(WIDTH, HEIGHT, BLACK)).collect(),
        }
    }
}

impl FrameSource for Camera {
    fn read(&mut self) -> Result<Frame> {
        self.frames
            .pop_front()
            .ok_or_else(|| Error::FrameRead("device closed".into()))
    }
}

#[derive(Default)]
struct RecordingWindow {
    keys: VecDeque<Option<i32>>,
    shown: Vec<(Frame, TextOverlay)>,
}

impl RecordingWindow {
    fn with_keys(keys: &[Option<i32>]) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
            shown: Vec::new(),
        }
    }
}

impl Window for RecordingWindow {
    fn poll_key(&mut self, delay_ms: i32) -> Result<Option<i32>> {
        assert_eq!(delay_ms, 1);
        Ok(self.keys.pop_front().flatten())
    }

    fn show(&mut self, frame: &Frame, overlay: &TextOverlay) -> Result<()> {
        self.shown.push((frame.clone(), overlay.clone()));
        Ok(())
    }
}

fn spread_hand() -> Hand {
    Hand::new(
        (0..NUM_LANDMARKS)
            .map(|i| NormalizedLandmark::new(0.1 + i as f32 * 0.037, 0.9 - i as f32 * 0.031, 0.0))
            .collect(),
    )
}

fn tracker(hands: Vec<Hand>, fail: bool) -> HandTracker<FixedModel> {
    HandTracker::new(DetectorConfig::default(), |_| {
        Ok(FixedModel { hands, fail })
    })
    .expect("default config is valid")
}

fn count_color(frame: &Frame, color: [u8; 3]) -> usize {
    frame
        .as_bytes()
        .chunks_exact(3)
        .filter(|px| *px == color)
        .count()
}

#[test]
fn exit_key_stops_before_processing() {
    let mut tracker = tracker(vec![spread_hand()], false);
    let mut camera = Camera::with_frames(5);
    let mut window = RecordingWindow::with_keys(&[Some(ESC)]);

    let shown = session::run(&mut tracker, &mut camera, &mut window).expect("clean exit");

    assert_eq!(shown, 0);
    assert!(window.shown.is_empty());
    assert_eq!(tracker.hand_count(), 0);
    assert_eq!(camera.frames.len(), 4);
}

#[test]
fn toggles_control_what_is_drawn() {
    let mut tracker = tracker(vec![spread_hand()], false);
    let mut camera = Camera::with_frames(10);
    let mut window =
        RecordingWindow::with_keys(&[None, Some(SPACE), Some(TAB), Some(SPACE), Some(ESC)]);

    let shown = session::run(&mut tracker, &mut camera, &mut window).expect("clean exit");
    assert_eq!(shown, 4);

    let [both, points_only, nothing, skeleton_only] = [0, 1, 2, 3].map(|i| &window.shown[i].0);

    assert!(count_color(both, CONNECTION_COLOR) > 0);
    assert!(count_color(both, MARKER_COLOR) > 0);

    assert_eq!(count_color(points_only, CONNECTION_COLOR), 0);
    assert!(count_color(points_only, MARKER_COLOR) > 0);

    assert_eq!(nothing, &Frame::filled(WIDTH, HEIGHT, BLACK));

    assert!(count_color(skeleton_only, CONNECTION_COLOR) > 0);
    assert_eq!(count_color(skeleton_only, MARKER_COLOR), 0);
}

#[test]
fn every_frame_carries_an_fps_overlay() {
    let mut tracker = tracker(vec![], false);
    let mut camera = Camera::with_frames(4);
    let mut window = RecordingWindow::with_keys(&[None, Some(113), None, Some(ESC)]);

    let shown = session::run(&mut tracker, &mut camera, &mut window).expect("clean exit");
    assert_eq!(shown, 3);
    for (frame, overlay) in &window.shown {
        assert!(overlay.text.starts_with("FPS: "), "{}", overlay.text);
        assert_eq!(overlay.origin, (10, 70));
        assert_eq!(frame, &Frame::filled(WIDTH, HEIGHT, BLACK));
    }
}

#[test]
fn frame_read_failure_is_fatal() {
    let mut tracker = tracker(vec![spread_hand()], false);
    let mut camera = Camera::with_frames(2);
    let mut window = RecordingWindow::default();

    let err = session::run(&mut tracker, &mut camera, &mut window).unwrap_err();

    assert!(matches!(err, Error::FrameRead(_)));
    assert_eq!(window.shown.len(), 2);
}

#[test]
fn model_errors_propagate() {
    let mut tracker = tracker(vec![spread_hand()], true);
    let mut camera = Camera::with_frames(2);
    let mut window = RecordingWindow::default();

    let err = session::run(&mut tracker, &mut camera, &mut window).unwrap_err();

    assert!(matches!(err, Error::Model(_)));
    assert!(window.shown.is_empty());
}
