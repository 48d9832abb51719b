// THEORY:
// Just enough rasterization to annotate a `Frame`: filled circles for landmark
// markers and thick line segments for the skeleton. Everything clips against
// the frame bounds, so callers can pass landmarks that sit partially outside
// the image (the model happily reports those).

use crate::core_modules::frame::{Bgr, Frame};
use crate::core_modules::landmark::{HAND_CONNECTIONS, Hand};

/// Style of the skeleton segments.
pub const CONNECTION_COLOR: Bgr = [224, 224, 224];
pub const CONNECTION_THICKNESS: u32 = 2;
/// Style of the small dots drawn on every landmark along with the skeleton.
pub const JOINT_COLOR: Bgr = [0, 0, 255];
pub const JOINT_RADIUS: i32 = 2;
/// Style of the large markers drawn by landmark extraction.
pub const MARKER_COLOR: Bgr = [255, 0, 255];
pub const MARKER_RADIUS: i32 = 10;

/// Fills a circle of the given radius centered on `(cx, cy)`.
pub fn fill_circle(frame: &mut Frame, (cx, cy): (i32, i32), radius: i32, color: Bgr) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                frame.put_pixel(cx + dx, cy + dy, color);
            }
        }
    }
}

/// Draws a line segment using Bresenham's algorithm, stamping a disc per step
/// for thicknesses above one pixel.
pub fn draw_line(frame: &mut Frame, from: (i32, i32), to: (i32, i32), color: Bgr, thickness: u32) {
    let brush = (thickness / 2) as i32;
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if brush == 0 {
            frame.put_pixel(x, y, color);
        } else {
            fill_circle(frame, (x, y), brush, color);
        }
        if (x, y) == to {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draws the model's skeleton for one hand: every connection, then a dot per landmark.
pub fn draw_hand_skeleton(frame: &mut Frame, hand: &Hand) {
    let (width, height) = (frame.width(), frame.height());
    let points: Vec<(i32, i32)> = hand
        .landmarks
        .iter()
        .map(|lm| lm.denormalize(width, height))
        .collect();

    for (a, b) in HAND_CONNECTIONS {
        if let (Some(&from), Some(&to)) = (points.get(*a as usize), points.get(*b as usize)) {
            draw_line(frame, from, to, CONNECTION_COLOR, CONNECTION_THICKNESS);
        }
    }
    for &point in &points {
        fill_circle(frame, point, JOINT_RADIUS, JOINT_COLOR);
    }
}
