//! Pixel-space cropping.
//!
//! The crop region comes straight from the aggregated bounding box, already
//! clamped and rounded out to whole pixels.
//!
//! # Example
//!
//! ```
//! use contour_crop_core::decode::DecodedImage;
//! use contour_crop_core::geometry::PixelRect;
//! use contour_crop_core::transform::crop_pixels;
//!
//! let image = DecodedImage::new(100, 100, vec![128u8; 100 * 100 * 4]);
//! let cropped = crop_pixels(&image, PixelRect::new(40, 40, 20, 20));
//! assert_eq!((cropped.width, cropped.height), (20, 20));
//! ```

use crate::decode::DecodedImage;
use crate::geometry::PixelRect;

/// Copy `region` out of `image` into a new buffer.
///
/// The region is intersected with the image bounds, so a caller that has
/// not validated it gets a smaller (possibly empty) image instead of a
/// panic. The encoder rejects empty results.
pub fn crop_pixels(image: &DecodedImage, region: PixelRect) -> DecodedImage {
    let channels = DecodedImage::CHANNELS;

    // Fast path: full-frame crop returns a clone
    if region == PixelRect::new(0, 0, image.width, image.height) {
        return image.clone();
    }

    let left = region.x.min(image.width);
    let top = region.y.min(image.height);
    let right = region.x.saturating_add(region.width).min(image.width);
    let bottom = region.y.saturating_add(region.height).min(image.height);

    let out_width = right - left;
    let out_height = bottom - top;

    let src_stride = image.width as usize * channels;
    let row_len = out_width as usize * channels;
    let mut output = Vec::with_capacity(row_len * out_height as usize);

    // Copy pixel data row by row
    for y in top..bottom {
        let start = y as usize * src_stride + left as usize * channels;
        output.extend_from_slice(&image.pixels[start..start + row_len]);
    }

    DecodedImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where each pixel has a unique value based on position.
    fn test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.extend_from_slice(&[v, v, v, 255]);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_full_crop() {
        let img = test_image(100, 100);
        let result = crop_pixels(&img, PixelRect::new(0, 0, 100, 100));
        assert_eq!((result.width, result.height), (100, 100));
        assert_eq!(result.pixels, img.pixels);
    }

    #[test]
    fn test_center_crop() {
        let img = test_image(100, 100);
        let result = crop_pixels(&img, PixelRect::new(40, 40, 20, 20));
        assert_eq!((result.width, result.height), (20, 20));
        assert_eq!(result.pixels.len(), 20 * 20 * 4);
        // (40, 40) = (40 * 100 + 40) % 256 = 200
        assert_eq!(result.pixel(0, 0), [200, 200, 200, 255]);
    }

    #[test]
    fn test_crop_pixel_values_preserved() {
        let img = test_image(10, 10);
        let result = crop_pixels(&img, PixelRect::new(3, 3, 4, 4));
        // Bottom-right of the crop is (6, 6) = 66
        assert_eq!(result.pixel(3, 3), [66, 66, 66, 255]);
    }

    #[test]
    fn test_crop_rectangular() {
        let img = test_image(200, 100);
        let result = crop_pixels(&img, PixelRect::new(0, 0, 50, 100));
        assert_eq!((result.width, result.height), (50, 100));
    }

    #[test]
    fn test_crop_overhang_is_trimmed() {
        let img = test_image(10, 10);
        let result = crop_pixels(&img, PixelRect::new(8, 8, 5, 5));
        assert_eq!((result.width, result.height), (2, 2));
    }

    #[test]
    fn test_crop_outside_is_empty() {
        let img = test_image(10, 10);
        let result = crop_pixels(&img, PixelRect::new(20, 0, 5, 5));
        assert!(result.is_empty());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
