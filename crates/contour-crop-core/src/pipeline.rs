//! Decode, find content, aggregate, crop, encode.
//!
//! # Stages
//!
//! 1. Decode the payload (the only `.await`)
//! 2. Collapse to a single-channel foreground mask
//! 3. Trace the outer border of each blob
//! 4. Fit a minimum-area rotated rectangle per border
//! 5. Fail with [`CropError::NoContent`] if there are no blobs
//! 6. Aggregate the rectangles into one axis-aligned box
//! 7. Clamp the box to the image
//! 8. Crop and re-encode
//!
//! Every stage fails fast; nothing falls back to the uncropped image.

use thiserror::Error;

use crate::analysis::{
    foreground_mask, ContourFinder, MinAreaRectFitter, OutlineFinder, RectFitter,
};
use crate::decode::{detect_format, DecodeError, DecodedImage, ImageDecoder, InlineDecoder};
use crate::encode::{CropEncoder, EncodeError, Encoding, ImageCodec};
use crate::geometry::{aggregate, GeometryError, OrientedRect, PixelRect};
use crate::options::CropOptions;

/// Errors surfaced by the crop pipeline.
#[derive(Debug, Error)]
pub enum CropError {
    /// The input is not a decodable image.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// No foreground region was found, so there is nothing to crop to.
    #[error("No foreground content found in image")]
    NoContent,

    /// The aggregator was handed no rectangles.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Cropping or encoding the final region failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Result of a successful crop.
#[derive(Debug, Clone)]
pub struct EncodedCrop {
    /// Encoded output image.
    pub bytes: Vec<u8>,
    /// Region of the source image that was kept.
    pub region: PixelRect,
    /// Encoding of `bytes`.
    pub encoding: Encoding,
}

/// Crop pipeline over pluggable collaborators.
///
/// Holds no mutable state, so one pipeline can serve any number of
/// concurrent crops.
#[derive(Debug, Clone)]
pub struct CropPipeline<
    D = InlineDecoder,
    F = ContourFinder,
    R = MinAreaRectFitter,
    E = ImageCodec,
> {
    decoder: D,
    finder: F,
    fitter: R,
    encoder: E,
    options: CropOptions,
}

impl CropPipeline {
    /// Pipeline with the default decoder, contour finder, fitter and codec.
    pub fn new(options: CropOptions) -> Self {
        Self::with_collaborators(
            InlineDecoder,
            ContourFinder::default(),
            MinAreaRectFitter,
            ImageCodec,
            options,
        )
    }
}

impl Default for CropPipeline {
    fn default() -> Self {
        Self::new(CropOptions::default())
    }
}

impl<D, F, R, E> CropPipeline<D, F, R, E>
where
    D: ImageDecoder,
    F: OutlineFinder,
    R: RectFitter,
    E: CropEncoder,
{
    pub fn with_collaborators(
        decoder: D,
        finder: F,
        fitter: R,
        encoder: E,
        options: CropOptions,
    ) -> Self {
        Self {
            decoder,
            finder,
            fitter,
            encoder,
            options,
        }
    }

    pub fn options(&self) -> &CropOptions {
        &self.options
    }

    /// Crop an encoded image to its foreground content.
    ///
    /// # Errors
    ///
    /// - [`CropError::Decode`] if `bytes` is not an image
    /// - [`CropError::NoContent`] if no foreground blob was found
    /// - [`CropError::Encode`] if the clamped region is empty or encoding fails
    pub async fn crop(&self, bytes: &[u8]) -> Result<EncodedCrop, CropError> {
        let encoding = self.options.encoding_for(detect_format(bytes));

        let image = self.decoder.decode(bytes).await?;
        tracing::debug!(width = image.width, height = image.height, "decoded image");

        let region = self.locate(&image)?;
        let bytes = self.encoder.crop_and_encode(&image, region, encoding)?;

        tracing::info!(
            x = region.x,
            y = region.y,
            width = region.width,
            height = region.height,
            output_bytes = bytes.len(),
            mime = encoding.mime_type(),
            "cropped to content"
        );

        Ok(EncodedCrop {
            bytes,
            region,
            encoding,
        })
    }

    /// Fit one rotated rectangle per foreground blob.
    pub fn detect_rects(&self, image: &DecodedImage) -> Vec<OrientedRect> {
        let mask = foreground_mask(image);
        let outlines = self.finder.find_outlines(&mask);
        tracing::debug!(outlines = outlines.len(), "traced outer outlines");

        outlines.iter().map(|o| self.fitter.fit(o)).collect()
    }

    /// Compute the crop region for already decoded pixels.
    ///
    /// The region is clamped to the image and rounded out to whole pixels;
    /// it may be empty if the content box lies outside the frame.
    pub fn locate(&self, image: &DecodedImage) -> Result<PixelRect, CropError> {
        let rects = self.detect_rects(image);
        if rects.is_empty() {
            return Err(CropError::NoContent);
        }

        let bbox = aggregate(&rects)?;
        tracing::debug!(
            left = bbox.left,
            right = bbox.right,
            top = bbox.top,
            bottom = bbox.bottom,
            rects = rects.len(),
            "aggregated content box"
        );

        let clamped = bbox.clamp(image.width, image.height);
        if clamped != bbox {
            tracing::warn!(
                ?bbox,
                width = image.width,
                height = image.height,
                "content box exceeds image, clamping"
            );
        }

        Ok(clamped.to_pixel_rect())
    }
}

/// Crop `bytes` to its content with the default collaborators.
pub async fn crop_to_content(bytes: &[u8], options: &CropOptions) -> Result<Vec<u8>, CropError> {
    CropPipeline::new(*options)
        .crop(bytes)
        .await
        .map(|crop| crop.bytes)
}
