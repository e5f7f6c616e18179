//! Axis-aligned extent of a rotated rectangle.
//!
//! For a rectangle of size `w x h` rotated by θ about its center, the
//! footprint on the image axes is:
//! ```text
//! axis_width  = w * |cos θ| + h * |sin θ|
//! axis_height = w * |sin θ| + h * |cos θ|
//! ```
//! The formula is exact; only floating point rounding separates the result
//! from the ideal value, so comparisons need a small epsilon.

use serde::{Deserialize, Serialize};

use super::OrientedRect;

/// Extent of an [`OrientedRect`] measured along the image axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub axis_width: f64,
    pub axis_height: f64,
}

/// Project a rotated rectangle onto the horizontal and vertical axes.
///
/// Defined for every finite size and angle. At multiples of 90° the
/// projection equals the rectangle's size (swapped at 90° and 270°).
pub fn project(rect: &OrientedRect) -> Projection {
    let angle_rad = rect.angle.to_radians();
    let cos = angle_rad.cos().abs();
    let sin = angle_rad.sin().abs();

    let w = rect.size.width;
    let h = rect.size.height;

    Projection {
        axis_width: w * cos + h * sin,
        axis_height: w * sin + h * cos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Size};

    const EPS: f64 = 1e-9;

    fn rect(w: f64, h: f64, angle: f64) -> OrientedRect {
        OrientedRect::new(Point::new(0.0, 0.0), Size::new(w, h), angle)
    }

    #[test]
    fn test_no_rotation() {
        let p = project(&rect(100.0, 50.0, 0.0));
        assert!((p.axis_width - 100.0).abs() < EPS);
        assert!((p.axis_height - 50.0).abs() < EPS);
    }

    #[test]
    fn test_quarter_turn_swaps() {
        let p = project(&rect(100.0, 50.0, 90.0));
        assert!((p.axis_width - 50.0).abs() < EPS);
        assert!((p.axis_height - 100.0).abs() < EPS);

        let p = project(&rect(100.0, 50.0, 270.0));
        assert!((p.axis_width - 50.0).abs() < EPS);
        assert!((p.axis_height - 100.0).abs() < EPS);
    }

    #[test]
    fn test_half_turn_preserves() {
        let p = project(&rect(100.0, 50.0, 180.0));
        assert!((p.axis_width - 100.0).abs() < EPS);
        assert!((p.axis_height - 50.0).abs() < EPS);
    }

    #[test]
    fn test_45_degrees_square() {
        // A 10x10 square at 45° is a diamond with diagonal 10 * sqrt(2)
        let p = project(&rect(10.0, 10.0, 45.0));
        let diag = 10.0 * std::f64::consts::SQRT_2;
        assert!((p.axis_width - diag).abs() < EPS);
        assert!((p.axis_height - diag).abs() < EPS);
    }

    #[test]
    fn test_negative_and_large_angles() {
        let a = project(&rect(30.0, 10.0, -30.0));
        let b = project(&rect(30.0, 10.0, 30.0));
        let c = project(&rect(30.0, 10.0, 390.0));
        assert!((a.axis_width - b.axis_width).abs() < EPS);
        assert!((a.axis_height - b.axis_height).abs() < EPS);
        assert!((c.axis_width - b.axis_width).abs() < EPS);
        assert!((c.axis_height - b.axis_height).abs() < EPS);
    }

    #[test]
    fn test_zero_size() {
        let p = project(&rect(0.0, 0.0, 37.0));
        assert_eq!(p.axis_width, 0.0);
        assert_eq!(p.axis_height, 0.0);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::geometry::{Point, Size};
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    proptest! {
        /// Property: Each extent lies between min(w, h) and w + h.
        #[test]
        fn prop_extent_bounded(
            w in 0.0f64..1000.0,
            h in 0.0f64..1000.0,
            angle in -720.0f64..720.0,
        ) {
            let p = project(&OrientedRect::new(Point::default(), Size::new(w, h), angle));
            let lo = w.min(h) - EPS * (w + h + 1.0);
            let hi = (w + h) * (1.0 + EPS) + EPS;

            prop_assert!(p.axis_width >= lo && p.axis_width <= hi,
                "axis_width {} outside [{}, {}]", p.axis_width, lo, hi);
            prop_assert!(p.axis_height >= lo && p.axis_height <= hi,
                "axis_height {} outside [{}, {}]", p.axis_height, lo, hi);
        }

        /// Property: Multiples of 90° give back the size (swapped on odd multiples).
        #[test]
        fn prop_right_angles_preserve_size(
            w in 0.0f64..1000.0,
            h in 0.0f64..1000.0,
            k in -8i32..=8,
        ) {
            let p = project(&OrientedRect::new(Point::default(), Size::new(w, h), 90.0 * k as f64));
            let (ew, eh) = if k % 2 == 0 { (w, h) } else { (h, w) };
            let tol = 1e-9 * (w + h + 1.0);

            prop_assert!((p.axis_width - ew).abs() < tol);
            prop_assert!((p.axis_height - eh).abs() < tol);
        }

        /// Property: Rotating by 180° does not change the footprint.
        #[test]
        fn prop_half_turn_invariant(
            w in 0.0f64..500.0,
            h in 0.0f64..500.0,
            angle in -360.0f64..360.0,
        ) {
            let a = project(&OrientedRect::new(Point::default(), Size::new(w, h), angle));
            let b = project(&OrientedRect::new(Point::default(), Size::new(w, h), angle + 180.0));
            let tol = 1e-9 * (w + h + 1.0);

            prop_assert!((a.axis_width - b.axis_width).abs() < tol);
            prop_assert!((a.axis_height - b.axis_height).abs() < tol);
        }
    }
}
