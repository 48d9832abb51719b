// OpenCV-backed implementations of the viewer's camera and window.

use hand_tracker::session::{FrameSource, TextOverlay, Window};
use hand_tracker::{Error, Frame};
use opencv::{
    core::{self, Mat, Point, Scalar},
    highgui, imgproc,
    prelude::*,
    videoio::{self, VideoCapture},
};
use tracing::{debug, info};

/// `wait_key` returns this when no key was pressed.
const NO_KEY: i32 = -1;

/// A webcam opened through `VideoCapture`.
pub struct Camera {
    capture: VideoCapture,
    buffer: Mat,
}

impl Camera {
    pub fn open(index: i32) -> anyhow::Result<Self> {
        let capture = VideoCapture::new(index, videoio::CAP_ANY)?;
        if !capture.is_opened()? {
            anyhow::bail!("could not open camera {index}");
        }
        info!(
            index,
            width = capture.get(videoio::CAP_PROP_FRAME_WIDTH)?,
            height = capture.get(videoio::CAP_PROP_FRAME_HEIGHT)?,
            "camera opened"
        );
        Ok(Self {
            capture,
            buffer: Mat::default(),
        })
    }
}

impl FrameSource for Camera {
    fn read(&mut self) -> hand_tracker::Result<Frame> {
        match self.capture.read(&mut self.buffer) {
            Ok(true) if !self.buffer.empty() => mat_to_frame(&self.buffer),
            Ok(_) => Err(Error::FrameRead("camera returned no frame".into())),
            Err(e) => Err(Error::FrameRead(e.to_string())),
        }
    }
}

/// Copies a continuous 8-bit BGR `Mat` into a `Frame`.
fn mat_to_frame(mat: &Mat) -> hand_tracker::Result<Frame> {
    if mat.typ() != core::CV_8UC3 {
        return Err(Error::FrameRead(format!(
            "unsupported pixel type {}, expected 8-bit BGR",
            mat.typ()
        )));
    }
    let owned;
    let mat = if mat.is_continuous() {
        mat
    } else {
        owned = mat.try_clone().map_err(|e| Error::FrameRead(e.to_string()))?;
        &owned
    };
    let data = mat
        .data_bytes()
        .map_err(|e| Error::FrameRead(e.to_string()))?
        .to_vec();
    Frame::new(mat.cols() as u32, mat.rows() as u32, data)
}

/// A HighGUI window that doubles as the keyboard source.
pub struct HighGuiWindow {
    title: String,
}

impl HighGuiWindow {
    pub fn open(title: &str) -> anyhow::Result<Self> {
        highgui::named_window(title, highgui::WINDOW_AUTOSIZE)?;
        Ok(Self {
            title: title.to_string(),
        })
    }
}

fn display_error(e: opencv::Error) -> Error {
    Error::Display(e.to_string())
}

impl Window for HighGuiWindow {
    fn poll_key(&mut self, delay_ms: i32) -> hand_tracker::Result<Option<i32>> {
        let code = highgui::wait_key(delay_ms).map_err(display_error)?;
        Ok((code != NO_KEY).then_some(code))
    }

    fn show(&mut self, frame: &Frame, overlay: &TextOverlay) -> hand_tracker::Result<()> {
        let mut mat = Mat::new_rows_cols_with_default(
            frame.height() as i32,
            frame.width() as i32,
            core::CV_8UC3,
            Scalar::all(0.0),
        )
        .map_err(display_error)?;
        mat.data_bytes_mut()
            .map_err(display_error)?
            .copy_from_slice(frame.as_bytes());

        let [b, g, r] = overlay.color;
        imgproc::put_text(
            &mut mat,
            &overlay.text,
            Point::new(overlay.origin.0, overlay.origin.1),
            imgproc::FONT_HERSHEY_PLAIN,
            overlay.scale,
            Scalar::new(b as f64, g as f64, r as f64, 0.0),
            overlay.thickness,
            imgproc::LINE_8,
            false,
        )
        .map_err(display_error)?;

        highgui::imshow(&self.title, &mat).map_err(display_error)
    }
}

impl Drop for HighGuiWindow {
    fn drop(&mut self) {
        if let Err(e) = highgui::destroy_window(&self.title) {
            debug!("failed to close window: {e}");
        }
    }
}
