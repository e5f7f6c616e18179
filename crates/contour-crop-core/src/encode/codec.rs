//! Crop-then-encode, the last step of the pipeline.

use super::{encode_rgba, EncodeError, Encoding};
use crate::decode::DecodedImage;
use crate::geometry::PixelRect;
use crate::transform::crop_pixels;

/// Crops a decoded image and encodes the result.
pub trait CropEncoder {
    /// Crop `region` out of `image` and encode it.
    ///
    /// Implementations must reject an empty region or one that reaches past
    /// the image rather than substituting a different crop.
    fn crop_and_encode(
        &self,
        image: &DecodedImage,
        region: PixelRect,
        encoding: Encoding,
    ) -> Result<Vec<u8>, EncodeError>;
}

/// [`CropEncoder`] backed by the `image` crate's PNG and JPEG encoders.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCodec;

impl CropEncoder for ImageCodec {
    fn crop_and_encode(
        &self,
        image: &DecodedImage,
        region: PixelRect,
        encoding: Encoding,
    ) -> Result<Vec<u8>, EncodeError> {
        if region.is_empty() {
            return Err(EncodeError::InvalidDimensions {
                width: region.width,
                height: region.height,
            });
        }

        if region.x.checked_add(region.width).map_or(true, |r| r > image.width)
            || region.y.checked_add(region.height).map_or(true, |b| b > image.height)
        {
            return Err(EncodeError::RegionOutOfBounds {
                region,
                width: image.width,
                height: image.height,
            });
        }

        let cropped = crop_pixels(image, region);
        encode_rgba(&cropped.pixels, cropped.width, cropped.height, encoding)
    }
}
