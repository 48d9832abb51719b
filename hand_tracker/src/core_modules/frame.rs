// THEORY:
// The `Frame` is the unit of data flowing through the viewer. It mirrors what a
// capture device hands us: a tightly packed, row-major buffer of 8-bit pixels in
// BGR channel order. Keeping the capture order as the canonical one means the
// camera and the window never pay for a conversion; only the model input is
// converted to RGB, right before detection.
//
// Like the pixel and chunk containers of the engine, a `Frame` is a "dumb" data
// container. Drawing lives in `draw`, detection lives in `pipeline`.

use crate::error::{Error, Result};
use image::RgbImage;

pub const CHANNELS: usize = 3;

/// A BGR color triple, in the same channel order as `Frame` data.
pub type Bgr = [u8; 3];

/// An owned 8-bit, 3-channel image in BGR channel order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The width of the frame in pixels.
    width: u32,
    /// The height of the frame in pixels.
    height: u32,
    /// Row-major BGR bytes, `width * height * 3` long.
    data: Vec<u8>,
}

impl Frame {
    /// Wraps a raw BGR buffer. Fails if the buffer length does not match the dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::InvalidFrame {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Creates a frame filled with a single color.
    pub fn filled(width: u32, height: u32, color: Bgr) -> Self {
        let data = color
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * CHANNELS)
            .collect();
        Self { width, height, data }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Bgr> {
        let offset = self.offset(x, y)?;
        Some([self.data[offset], self.data[offset + 1], self.data[offset + 2]])
    }

    /// Writes a pixel. Coordinates outside the frame are silently clipped.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Bgr) {
        if let Some(offset) = self.offset(x, y) {
            self.data[offset..offset + CHANNELS].copy_from_slice(&color);
        }
    }

    /// Converts to the RGB channel order expected by the landmark model.
    pub fn to_rgb_image(&self) -> RgbImage {
        let mut rgb = Vec::with_capacity(self.data.len());
        for bgr in self.data.chunks_exact(CHANNELS) {
            rgb.extend_from_slice(&[bgr[2], bgr[1], bgr[0]]);
        }
        // The length invariant is upheld by every constructor.
        RgbImage::from_raw(self.width, self.height, rgb)
            .unwrap_or_else(|| RgbImage::new(self.width, self.height))
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * CHANNELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_buffer() {
        let err = Frame::new(4, 4, vec![0; 10]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidFrame { expected: 48, actual: 10, .. }
        ));
    }

    #[test]
    fn rgb_conversion_swaps_red_and_blue() {
        let frame = Frame::filled(2, 1, [10, 20, 30]);
        let rgb = frame.to_rgb_image();
        assert_eq!(rgb.dimensions(), (2, 1));
        assert_eq!(rgb.get_pixel(1, 0).0, [30, 20, 10]);
    }

    #[test]
    fn put_pixel_clips_out_of_bounds() {
        let mut frame = Frame::filled(3, 3, [0, 0, 0]);
        frame.put_pixel(-1, 0, [255, 255, 255]);
        frame.put_pixel(3, 3, [255, 255, 255]);
        assert!(frame.as_bytes().iter().all(|&b| b == 0));

        frame.put_pixel(1, 2, [1, 2, 3]);
        assert_eq!(frame.pixel(1, 2), Some([1, 2, 3]));
        assert_eq!(frame.pixel(5, 0), None);
    }
}
