//! PNG and JPEG encoding of RGBA pixel buffers.
//!
//! PNG keeps the alpha channel, which matters for cut-out artwork on a
//! transparent background. JPEG has no alpha, so it is dropped before
//! encoding.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use thiserror::Error;

use crate::geometry::PixelRect;

/// Default JPEG quality, matching common photo-editor exports.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Errors that can occur during crop and encode.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Crop region reaches past the image
    #[error("Crop region {region:?} exceeds image bounds {width}x{height}")]
    RegionOutOfBounds {
        region: PixelRect,
        width: u32,
        height: u32,
    },

    /// The underlying encoder failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Output encoding for a cropped image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    Png,
    Jpeg { quality: u8 },
}

impl Encoding {
    /// MIME type of the encoded bytes.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Encoding::Png => "image/png",
            Encoding::Jpeg { .. } => "image/jpeg",
        }
    }
}

/// Encode RGBA pixel data with the given encoding.
pub fn encode_rgba(
    pixels: &[u8],
    width: u32,
    height: u32,
    encoding: Encoding,
) -> Result<Vec<u8>, EncodeError> {
    match encoding {
        Encoding::Png => encode_png(pixels, width, height),
        Encoding::Jpeg { quality } => encode_jpeg(pixels, width, height, quality),
    }
}

/// Encode RGBA pixel data to PNG bytes.
///
/// # Example
///
/// ```
/// use contour_crop_core::encode::encode_png;
///
/// let pixels = vec![0u8; 10 * 10 * 4]; // Transparent image
/// let png = encode_png(&pixels, 10, 10).unwrap();
/// assert_eq!(&png[1..4], b"PNG");
/// ```
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height)?;

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode RGBA pixel data to JPEG bytes, discarding alpha.
///
/// `quality` is clamped to 1-100.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    validate(pixels, width, height)?;

    let rgb: Vec<u8> = pixels
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let quality = quality.clamp(1, 100);
    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

fn validate(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 4;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_basic() {
        let pixels = vec![128u8; 20 * 10 * 4];
        let png = encode_png(&pixels, 20, 10).unwrap();
        assert_eq!(&png[0..8], &PNG_MAGIC);
    }

    #[test]
    fn test_encode_png_preserves_alpha() {
        let mut pixels = vec![0u8; 8];
        pixels[4..8].copy_from_slice(&[10, 20, 30, 40]);
        let png = encode_png(&pixels, 2, 1).unwrap();

        let decoded = image::load_from_memory(&png).unwrap().into_rgba8();
        assert_eq!(decoded.get_pixel(1, 0).0, [10, 20, 30, 40]);
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_jpeg_basic() {
        let pixels = vec![128u8; 16 * 16 * 4];
        let jpeg = encode_jpeg(&pixels, 16, 16, 90).unwrap();

        // SOI and EOI markers
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_quality_clamping() {
        let pixels = vec![128u8; 10 * 10 * 4];
        assert!(encode_jpeg(&pixels, 10, 10, 0).is_ok());
        assert!(encode_jpeg(&pixels, 10, 10, 255).is_ok());
    }

    #[test]
    fn test_zero_dimensions() {
        assert!(matches!(
            encode_png(&[], 0, 10),
            Err(EncodeError::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(matches!(
            encode_jpeg(&[], 10, 0, 90),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_pixel_length_mismatch() {
        // RGB-sized buffer handed to an RGBA encoder
        let pixels = vec![128u8; 10 * 10 * 3];
        assert!(matches!(
            encode_png(&pixels, 10, 10),
            Err(EncodeError::InvalidPixelData {
                expected: 400,
                actual: 300
            })
        ));
    }

    #[test]
    fn test_encode_rgba_dispatch() {
        let pixels = vec![255u8; 4 * 4 * 4];
        let png = encode_rgba(&pixels, 4, 4, Encoding::Png).unwrap();
        let jpeg = encode_rgba(&pixels, 4, 4, Encoding::Jpeg { quality: 80 }).unwrap();
        assert_eq!(&png[0..8], &PNG_MAGIC);
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(Encoding::Png.mime_type(), "image/png");
        assert_eq!(Encoding::Jpeg { quality: 90 }.mime_type(), "image/jpeg");
    }

    #[test]
    fn test_region_error_display() {
        let err = EncodeError::RegionOutOfBounds {
            region: PixelRect::new(5, 5, 10, 10),
            width: 8,
            height: 8,
        };
        assert!(err.to_string().contains("exceeds image bounds 8x8"));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
