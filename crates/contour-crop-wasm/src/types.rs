//! WASM-compatible wrapper types.
//!
//! These wrap the core geometry and option types and handle conversion
//! between Rust and JavaScript data representations.

use contour_crop_core::geometry::{aggregate, BoundingBox, OrientedRect, Point, Projection, Size};
use contour_crop_core::{CropOptions, OutputFormat};
use wasm_bindgen::prelude::*;

/// Crop options wrapper for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsCropOptions {
    inner: CropOptions,
}

#[wasm_bindgen]
impl JsCropOptions {
    /// Create options with default values (match source format, quality 90)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from a plain object such as
    /// `{ output_format: "jpeg", jpeg_quality: 80 }`. Missing fields keep
    /// their defaults.
    pub fn from_js(value: JsValue) -> Result<JsCropOptions, JsValue> {
        let inner: CropOptions = serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&format!("Invalid crop options: {}", e)))?;
        Ok(Self { inner })
    }

    /// Serialize to a plain object
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get output format ("match_source", "png" or "jpeg").
    ///
    /// Read-only as a property; change it with `set_output_format`, which
    /// rejects unknown names.
    #[wasm_bindgen(getter)]
    pub fn output_format(&self) -> String {
        output_format_name(self.inner.output_format).to_string()
    }

    /// Set output format ("match_source", "png" or "jpeg", case-insensitive).
    ///
    /// # Errors
    /// Returns error for any other name, leaving the current format unchanged
    pub fn set_output_format(&mut self, value: &str) -> Result<(), JsValue> {
        self.inner.output_format = parse_output_format(value)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown output format: {}", value)))?;
        Ok(())
    }

    /// Get JPEG quality
    #[wasm_bindgen(getter)]
    pub fn jpeg_quality(&self) -> u8 {
        self.inner.jpeg_quality
    }

    /// Set JPEG quality (clamped to 1-100 when encoding)
    #[wasm_bindgen(setter)]
    pub fn set_jpeg_quality(&mut self, value: u8) {
        self.inner.jpeg_quality = value;
    }
}

impl JsCropOptions {
    pub(crate) fn inner(&self) -> &CropOptions {
        &self.inner
    }
}

fn output_format_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::MatchSource => "match_source",
        OutputFormat::Png => "png",
        OutputFormat::Jpeg => "jpeg",
    }
}

pub(crate) fn parse_output_format(value: &str) -> Option<OutputFormat> {
    match value.to_ascii_lowercase().as_str() {
        "match_source" => Some(OutputFormat::MatchSource),
        "png" => Some(OutputFormat::Png),
        "jpeg" | "jpg" => Some(OutputFormat::Jpeg),
        _ => None,
    }
}

/// Axis-aligned box for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct JsBoundingBox {
    inner: BoundingBox,
}

#[wasm_bindgen]
impl JsBoundingBox {
    #[wasm_bindgen(getter)]
    pub fn left(&self) -> f64 {
        self.inner.left
    }

    #[wasm_bindgen(getter)]
    pub fn right(&self) -> f64 {
        self.inner.right
    }

    #[wasm_bindgen(getter)]
    pub fn top(&self) -> f64 {
        self.inner.top
    }

    #[wasm_bindgen(getter)]
    pub fn bottom(&self) -> f64 {
        self.inner.bottom
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.inner.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.inner.height()
    }

    /// Intersect with an image of the given size.
    pub fn clamp(&self, width: u32, height: u32) -> JsBoundingBox {
        JsBoundingBox::from(self.inner.clamp(width, height))
    }

    /// Whole-pixel region `[x, y, width, height]` containing this box.
    pub fn pixel_rect(&self) -> Vec<u32> {
        let r = self.inner.to_pixel_rect();
        vec![r.x, r.y, r.width, r.height]
    }
}

impl From<BoundingBox> for JsBoundingBox {
    fn from(inner: BoundingBox) -> Self {
        Self { inner }
    }
}

/// Axis-aligned extent of a rotated rectangle.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct JsProjection {
    inner: Projection,
}

#[wasm_bindgen]
impl JsProjection {
    #[wasm_bindgen(getter)]
    pub fn axis_width(&self) -> f64 {
        self.inner.axis_width
    }

    #[wasm_bindgen(getter)]
    pub fn axis_height(&self) -> f64 {
        self.inner.axis_height
    }
}

impl From<Projection> for JsProjection {
    fn from(inner: Projection) -> Self {
        Self { inner }
    }
}

/// A list of rotated rectangles to aggregate into one bounding box.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct JsRectList {
    rects: Vec<OrientedRect>,
}

#[wasm_bindgen]
impl JsRectList {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an array of
    /// `{ center: {x, y}, size: {width, height}, angle }` objects.
    pub fn from_js(value: JsValue) -> Result<JsRectList, JsValue> {
        let rects: Vec<OrientedRect> = serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&format!("Invalid rectangles: {}", e)))?;
        Ok(Self { rects })
    }

    /// Append a rectangle given by center, unrotated size and angle in degrees.
    pub fn push(&mut self, center_x: f64, center_y: f64, width: f64, height: f64, angle: f64) {
        self.rects.push(OrientedRect::new(
            Point::new(center_x, center_y),
            Size::new(width, height),
            angle,
        ));
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.rects.len()
    }

    /// Smallest axis-aligned box enclosing every rectangle.
    ///
    /// # Errors
    /// Returns error if the list is empty
    pub fn bounding_box(&self) -> Result<JsBoundingBox, JsValue> {
        self.try_bounding_box()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsRectList {
    pub(crate) fn try_bounding_box(
        &self,
    ) -> Result<JsBoundingBox, contour_crop_core::geometry::GeometryError> {
        aggregate(&self.rects).map(JsBoundingBox::from)
    }
}
