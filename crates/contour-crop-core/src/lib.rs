//! Contour Crop Core - crop images to their visible content
//!
//! This crate finds the foreground blobs of an image, fits a rotated
//! rectangle to each one and crops the image to the axis-aligned box that
//! encloses all of them.
//!
//! # Modules
//!
//! - [`decode`]: async decoding of JPEG/PNG bytes into RGBA pixels
//! - [`analysis`]: foreground mask, outline tracing and rectangle fitting
//! - [`geometry`]: rotated-rectangle projection and bounding box aggregation
//! - [`transform`]: pixel cropping
//! - [`encode`]: PNG/JPEG output
//! - [`pipeline`]: the end-to-end [`CropPipeline`]
//!
//! # Example
//!
//! ```ignore
//! use contour_crop_core::{crop_to_content, CropOptions};
//!
//! let cropped = crop_to_content(&bytes, &CropOptions::default()).await?;
//! ```

pub mod analysis;
pub mod decode;
pub mod encode;
pub mod geometry;
pub mod luminance;
pub mod options;
pub mod pipeline;
pub mod transform;

pub use geometry::{aggregate, project, BoundingBox, OrientedRect, PixelRect, Point, Size};
pub use options::{CropOptions, OutputFormat};
pub use pipeline::{crop_to_content, CropError, CropPipeline, EncodedCrop};
