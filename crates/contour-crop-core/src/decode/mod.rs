//! Image decoding for the crop pipeline.
//!
//! This module provides functionality for:
//! - Sniffing and decoding PNG/JPEG payloads into RGBA pixel buffers
//! - Applying EXIF orientation so crops match what a viewer displays
//! - Exposing decode as a future ([`ImageDecoder`]), the only point where
//!   the pipeline suspends
//!
//! # Examples
//!
//! ```ignore
//! use contour_crop_core::decode::decode_image;
//!
//! let bytes = std::fs::read("logo.png").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod reader;
mod task;
mod types;

pub use reader::{decode_image, detect_format, extract_orientation};
#[cfg(not(target_arch = "wasm32"))]
pub use task::ThreadDecoder;
pub use task::{ImageDecoder, InlineDecoder};
pub use types::{DecodeError, DecodedImage, Orientation};
