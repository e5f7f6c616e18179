//! Image transformation operations.
//!
//! # Coordinate System
//!
//! - Crop regions are whole pixels: `x`, `y`, `width`, `height`
//! - Origin is top-left corner

mod crop;

pub use crop::crop_pixels;
