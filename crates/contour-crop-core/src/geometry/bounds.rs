//! Bounding box aggregation over oriented rectangles.
//!
//! Each rectangle contributes the box of its own projected footprint and the
//! boxes are merged with component-wise min/max. The merge is commutative and
//! associative, so traversal order never affects the result.

use thiserror::Error;

use super::{BoundingBox, OrientedRect};

/// Errors from geometry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// No rectangles were supplied, so there is no box to compute.
    #[error("Cannot compute a bounding box of zero rectangles")]
    EmptyInput,
}

/// Compute the tightest axis-aligned box containing every rectangle's
/// rotated footprint.
///
/// # Errors
///
/// Returns `GeometryError::EmptyInput` if `rects` is empty.
///
/// # Example
///
/// ```
/// use contour_crop_core::geometry::{aggregate, OrientedRect, Point, Size};
///
/// let rects = [
///     OrientedRect::new(Point::new(10.0, 10.0), Size::new(4.0, 4.0), 0.0),
///     OrientedRect::new(Point::new(90.0, 90.0), Size::new(4.0, 4.0), 0.0),
/// ];
/// let bbox = aggregate(&rects).unwrap();
/// assert_eq!((bbox.left, bbox.right, bbox.top, bbox.bottom), (8.0, 92.0, 8.0, 92.0));
/// ```
pub fn aggregate(rects: &[OrientedRect]) -> Result<BoundingBox, GeometryError> {
    aggregate_iter(rects)
}

/// Same as [`aggregate`], for any iterator of rectangles.
pub fn aggregate_iter<'a, I>(rects: I) -> Result<BoundingBox, GeometryError>
where
    I: IntoIterator<Item = &'a OrientedRect>,
{
    rects
        .into_iter()
        .map(BoundingBox::of_rect)
        .reduce(BoundingBox::union)
        .ok_or(GeometryError::EmptyInput)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
