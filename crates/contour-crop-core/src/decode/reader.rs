//! Format-agnostic decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageError, ImageFormat, ImageReader};

use super::{DecodeError, DecodedImage, Orientation};

/// Decode an encoded image from bytes, applying EXIF orientation correction.
///
/// The format is sniffed from the leading bytes, so PNG and JPEG payloads
/// are both accepted. The result is always RGBA8.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a recognized
/// image format.
/// Returns `DecodeError::CorruptedFile` if the data is truncated or corrupted.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let format = detect_format(bytes).ok_or(DecodeError::InvalidFormat)?;
    let orientation = extract_orientation(bytes);

    let img = ImageReader::with_format(Cursor::new(bytes), format)
        .decode()
        .map_err(|e| match e {
            ImageError::Unsupported(_) => DecodeError::InvalidFormat,
            other => DecodeError::CorruptedFile(other.to_string()),
        })?;

    let oriented_img = apply_orientation(img, orientation);
    Ok(DecodedImage::from_rgba_image(oriented_img.into_rgba8()))
}

/// Guess the container format from the leading bytes.
pub fn detect_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes).ok()
}

/// Extract EXIF orientation from an image container.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
pub fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    Reader::new()
        .read_from_container(&mut cursor)
        .ok()
        .and_then(|exif| {
            exif.get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .map(Orientation::from)
        .unwrap_or_default()
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
