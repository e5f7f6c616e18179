//! Contour Crop WASM - WebAssembly bindings for contour-crop-core
//!
//! This crate exposes the crop pipeline and its geometry helpers to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `crop` - async crop-to-content entry point
//! - `geometry` - rotated rectangle projection
//! - `types` - WASM-compatible wrappers for options, boxes and rectangle lists
//!
//! # Usage
//!
//! ```typescript
//! import init, { crop_to_content } from '@contour-crop/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const cropped = await crop_to_content(bytes);
//! ```

use wasm_bindgen::prelude::*;

mod crop;
mod geometry;
mod types;

pub use crop::crop_to_content;
pub use geometry::project_rect;
pub use types::{JsBoundingBox, JsCropOptions, JsProjection, JsRectList};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), "0.1.0");
    }
}
