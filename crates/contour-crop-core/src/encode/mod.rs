//! Crop and re-encode for the final pipeline step.
//!
//! This module provides functionality for:
//! - Encoding RGBA buffers to PNG (alpha kept) or JPEG (alpha dropped)
//! - The [`CropEncoder`] seam the pipeline calls with the final region
//!
//! # Examples
//!
//! ```ignore
//! use contour_crop_core::encode::encode_png;
//!
//! let pixels = vec![0u8; 100 * 100 * 4];
//! let png_bytes = encode_png(&pixels, 100, 100).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod codec;
mod formats;

pub use codec::{CropEncoder, ImageCodec};
pub use formats::{
    encode_jpeg, encode_png, encode_rgba, EncodeError, Encoding, DEFAULT_JPEG_QUALITY,
};
