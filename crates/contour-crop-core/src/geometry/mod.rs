//! Oriented-rectangle geometry.
//!
//! Foreground blobs are represented as [`OrientedRect`]s: a center, an
//! unrotated size and a rotation angle about the center. This module turns a
//! collection of those into the single axis-aligned [`BoundingBox`] that
//! encloses every rotated footprint.
//!
//! # Coordinate System
//!
//! - Pixel coordinates, origin at the top-left corner, y grows downward
//! - Angles are in degrees; any finite value is accepted
//! - A box spans `[left, right] x [top, bottom]` on pixel edges, so a box of
//!   `(0, 10, 0, 10)` covers pixels `0..10` in each direction

mod bounds;
mod projection;

pub use bounds::{aggregate, aggregate_iter, GeometryError};
pub use projection::{project, Projection};

use serde::{Deserialize, Serialize};

/// Values this close to an integer are treated as that integer when
/// converting a box to whole pixels.
const PIXEL_SNAP_EPSILON: f64 = 1e-6;

/// A 2D point in image pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of an unrotated rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A rectangle rotated by `angle` degrees about its `center`.
///
/// Produced once per blob by the rectangle fitter and never mutated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OrientedRect {
    /// Center of the rectangle in pixel coordinates.
    pub center: Point,
    /// Size of the rectangle before rotation (both components >= 0).
    pub size: Size,
    /// Rotation in degrees about `center`.
    pub angle: f64,
}

impl OrientedRect {
    pub fn new(center: Point, size: Size, angle: f64) -> Self {
        Self {
            center,
            size,
            angle,
        }
    }

    /// Axis-aligned rectangle (angle 0) spanning `[left, left + width] x [top, top + height]`.
    pub fn axis_aligned(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            center: Point::new(left + width / 2.0, top + height / 2.0),
            size: Size::new(width, height),
            angle: 0.0,
        }
    }
}

/// Axis-aligned box in pixel space.
///
/// Invariant: `left <= right` and `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl BoundingBox {
    /// Box covering the rotated footprint of a single rectangle.
    pub fn of_rect(rect: &OrientedRect) -> Self {
        let projection = project(rect);
        let half_w = projection.axis_width / 2.0;
        let half_h = projection.axis_height / 2.0;
        Self {
            left: rect.center.x - half_w,
            right: rect.center.x + half_w,
            top: rect.center.y - half_h,
            bottom: rect.center.y + half_h,
        }
    }

    /// Smallest box containing both `self` and `other`.
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self {
            left: self.left.min(other.left),
            right: self.right.max(other.right),
            top: self.top.min(other.top),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Intersect with the image extent `[0, width] x [0, height]`.
    ///
    /// A box lying entirely outside the image collapses onto the nearest
    /// image edge, leaving a zero-area box rather than an inverted one.
    pub fn clamp(self, width: u32, height: u32) -> Self {
        let (w, h) = (width as f64, height as f64);
        let left = self.left.clamp(0.0, w);
        let top = self.top.clamp(0.0, h);
        Self {
            left,
            right: self.right.clamp(left, w),
            top,
            bottom: self.bottom.clamp(top, h),
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Smallest whole-pixel rectangle containing this box.
    ///
    /// Negative coordinates saturate to zero, so clamp first when the box may
    /// extend past the image.
    pub fn to_pixel_rect(&self) -> PixelRect {
        let left = snap_floor(self.left).max(0.0) as u32;
        let top = snap_floor(self.top).max(0.0) as u32;
        let right = snap_ceil(self.right).max(0.0) as u32;
        let bottom = snap_ceil(self.bottom).max(0.0) as u32;
        PixelRect {
            x: left,
            y: top,
            width: right.saturating_sub(left),
            height: bottom.saturating_sub(top),
        }
    }
}

fn snap_floor(v: f64) -> f64 {
    let r = v.round();
    if (v - r).abs() < PIXEL_SNAP_EPSILON {
        r
    } else {
        v.floor()
    }
}

fn snap_ceil(v: f64) -> f64 {
    let r = v.round();
    if (v - r).abs() < PIXEL_SNAP_EPSILON {
        r
    } else {
        v.ceil()
    }
}

/// Integer crop region in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}
