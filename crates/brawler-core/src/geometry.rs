//! Axis-aligned rectangles and the overlap test used for every hit check.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Axis-aligned rectangle. `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Negative extents are clamped to zero.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Strict AABB intersection. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Free-function form of [`Rect::overlaps`].
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

/// Region anchored to a moving point.
pub fn recompute(anchor: Position, offset_x: f64, offset_y: f64, width: f64, height: f64) -> Rect {
    Rect::new(anchor.x + offset_x, anchor.y + offset_y, width, height)
}

/// Offset and size of a region relative to its owner's anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionSpec {
    pub offset_x: f64,
    pub offset_y: f64,
    pub width: f64,
    pub height: f64,
}

impl RegionSpec {
    pub const fn new(offset_x: f64, offset_y: f64, width: f64, height: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            width,
            height,
        }
    }

    /// Place this region at `anchor`.
    pub fn at(&self, anchor: Position) -> Rect {
        recompute(anchor, self.offset_x, self.offset_y, self.width, self.height)
    }
}
