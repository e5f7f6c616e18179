//! Shape analysis: foreground mask, blob outlines and rectangle fitting.
//!
//! The pipeline talks to this module through two traits so either stage can
//! be swapped out:
//! - [`OutlineFinder`] traces the outer border of each foreground blob
//! - [`RectFitter`] fits a minimum-area [`OrientedRect`] to one outline
//!
//! Default implementations are [`ContourFinder`] (border following from
//! `imageproc`) and [`MinAreaRectFitter`] (convex hull + edge search).

mod contours;
mod fit;

pub use contours::{approximate_simple, ChainApproximation, ContourFinder, Outline};
pub use fit::{min_area_rect, MinAreaRectFitter};

use image::{GrayImage, Luma};

use crate::decode::DecodedImage;
use crate::geometry::OrientedRect;
use crate::luminance::luma_rgba;

/// Finds the outer borders of foreground blobs in a single-channel mask.
///
/// Non-zero pixels are foreground. Only top-level borders are reported:
/// blobs nested inside holes of other blobs are ignored.
pub trait OutlineFinder {
    fn find_outlines(&self, mask: &GrayImage) -> Vec<Outline>;
}

/// Fits a minimum-area rotated rectangle to an outline.
pub trait RectFitter {
    fn fit(&self, outline: &Outline) -> OrientedRect;
}

/// Collapse an RGBA image to the single-channel mask used for shape analysis.
///
/// Each pixel becomes its BT.601 luma scaled by alpha, so black and fully
/// transparent pixels are background.
pub fn foreground_mask(image: &DecodedImage) -> GrayImage {
    GrayImage::from_fn(image.width, image.height, |x, y| {
        Luma([luma_rgba(image.pixel(x, y))])
    })
}
