//! State and geometry for drawing classification results on top of the camera image.
//!
//! Nothing in here is needed to classify a hand. Renderers use it to place a gesture label next to
//! a hand and to paint a trail of fingertip positions.

use itertools::{Itertools, MinMaxResult};

use crate::{landmark::HandLandmarks, resolution::Resolution};

/// A position in image pixels. May lie outside the image.
pub type Pixel = (i32, i32);

/// Maps normalized image coordinates to the pixel that contains them.
///
/// Coordinates are clamped to the image's last row and column. Negative coordinates are clamped to
/// `0`.
pub fn to_pixel(x: f32, y: f32, res: Resolution) -> Pixel {
    fn axis(v: f32, size: u32) -> i32 {
        let max = size.saturating_sub(1) as f32;
        (v * size as f32).floor().clamp(0.0, max) as i32
    }

    (axis(x, res.width()), axis(y, res.height()))
}

/// An axis-aligned rectangle in pixel coordinates, with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl PixelRect {
    /// Computes the pixel-space bounding rectangle of all landmarks of a hand.
    pub fn bounding(hand: &HandLandmarks, res: Resolution) -> Self {
        let (x_min, x_max) = min_max(hand.iter().map(|lm| lm.x()));
        let (y_min, y_max) = min_max(hand.iter().map(|lm| lm.y()));
        let (x_min, y_min) = to_pixel(x_min, y_min, res);
        let (x_max, y_max) = to_pixel(x_max, y_max, res);
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> i32 {
        self.y_max - self.y_min
    }
}

fn min_max(values: impl Iterator<Item = f32>) -> (f32, f32) {
    match values.minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => (0.0, 0.0),
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(min, max) => (min, max),
    }
}

/// Computes where to draw the label of a hand: `margin` pixels above its bounding rectangle,
/// aligned with its left edge.
///
/// The anchor's Y coordinate saturates at the `i32` range for extreme margins.
pub fn label_anchor(hand: &HandLandmarks, res: Resolution, margin: i32) -> Pixel {
    let rect = PixelRect::bounding(hand, res);
    (rect.x_min, rect.y_min.saturating_sub(margin))
}

/// An ordered trail of points, eg. the path drawn by a pointing fingertip.
///
/// Points are stored in normalized image coordinates, so the trail can be rendered at any
/// resolution.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: Vec<[f32; 2]>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point to the end of the trail.
    pub fn push(&mut self, x: f32, y: f32) {
        self.points.push([x, y]);
    }

    /// Removes all points.
    pub fn clear(&mut self) {
        if !self.points.is_empty() {
            log::trace!("clearing trail of {} points", self.points.len());
        }
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[[f32; 2]] {
        &self.points
    }

    /// Returns the line segments connecting consecutive points, in pixel coordinates.
    ///
    /// A trail with fewer than 2 points has no segments.
    pub fn render(&self, res: Resolution) -> impl Iterator<Item = (Pixel, Pixel)> + '_ {
        self.points
            .iter()
            .map(move |&[x, y]| to_pixel(x, y, res))
            .tuple_windows()
    }
}
