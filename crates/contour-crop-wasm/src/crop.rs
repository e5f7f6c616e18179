//! Crop-to-content WASM binding.
//!
//! # Example
//!
//! ```typescript
//! import { crop_to_content, JsCropOptions } from '@contour-crop/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const cropped = await crop_to_content(bytes);
//!
//! const opts = new JsCropOptions();
//! opts.set_output_format('jpeg');
//! opts.jpeg_quality = 85;
//! const jpeg = await crop_to_content(bytes, opts);
//! ```

use crate::types::JsCropOptions;
use contour_crop_core::{CropError, CropOptions, CropPipeline};
use wasm_bindgen::prelude::*;

/// Crop an encoded image to the box enclosing all of its foreground content.
///
/// Resolves to the encoded crop, or rejects with a message if the input is
/// not a JPEG/PNG image, has no foreground content, or cannot be encoded.
#[wasm_bindgen]
pub async fn crop_to_content(
    bytes: Vec<u8>,
    options: Option<JsCropOptions>,
) -> Result<Vec<u8>, JsValue> {
    let options = options.map(|o| *o.inner()).unwrap_or_default();
    crop_bytes(&bytes, options)
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

pub(crate) async fn crop_bytes(bytes: &[u8], options: CropOptions) -> Result<Vec<u8>, CropError> {
    CropPipeline::new(options).crop(bytes).await.map(|crop| crop.bytes)
}
