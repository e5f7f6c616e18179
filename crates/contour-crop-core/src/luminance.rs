//! Luma calculation used to collapse RGBA pixels to a single channel.
//!
//! Uses the ITU-R BT.601 weights, the conventional choice for grayscale
//! conversion ahead of shape analysis.

/// ITU-R BT.601 coefficient for red channel.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green channel.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue channel.
pub const LUMA_B: f32 = 0.114;

/// Calculate luma from u8 RGB values (0 to 255).
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let luma = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    luma.clamp(0.0, 255.0).round() as u8
}

/// Calculate luma from an RGBA pixel, scaled by its opacity.
///
/// Fully transparent pixels always map to 0 regardless of their color.
#[inline]
pub fn luma_rgba(px: [u8; 4]) -> u8 {
    let luma = luma_u8(px[0], px[1], px[2]) as u32;
    ((luma * px[3] as u32 + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        let sum = LUMA_R + LUMA_G + LUMA_B;
        assert!((sum - 1.0).abs() < 1e-6, "Coefficients should sum to 1.0");
    }

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma_u8(0, 0, 0), 0);
        assert_eq!(luma_u8(255, 255, 255), 255);
    }

    #[test]
    fn test_luma_green_dominates() {
        assert!(luma_u8(0, 255, 0) > luma_u8(255, 0, 0));
        assert!(luma_u8(255, 0, 0) > luma_u8(0, 0, 255));
    }

    #[test]
    fn test_luma_rgba_opaque_matches_rgb() {
        assert_eq!(luma_rgba([90, 180, 30, 255]), luma_u8(90, 180, 30));
    }

    #[test]
    fn test_luma_rgba_transparent_is_zero() {
        assert_eq!(luma_rgba([255, 255, 255, 0]), 0);
    }

    #[test]
    fn test_luma_rgba_half_alpha() {
        assert_eq!(luma_rgba([255, 255, 255, 128]), 128);
    }
}
