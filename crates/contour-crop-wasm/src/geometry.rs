//! Geometry WASM bindings.

use crate::types::JsProjection;
use contour_crop_core::geometry::{project, OrientedRect, Point, Size};
use wasm_bindgen::prelude::*;

/// Axis-aligned extent of a `width` x `height` rectangle rotated by `angle`
/// degrees.
#[wasm_bindgen]
pub fn project_rect(width: f64, height: f64, angle: f64) -> JsProjection {
    let rect = OrientedRect::new(Point::default(), Size::new(width, height), angle);
    JsProjection::from(project(&rect))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_rect_right_angle() {
        let p = project_rect(30.0, 10.0, 90.0);
        assert!((p.axis_width() - 10.0).abs() < 1e-9);
        assert!((p.axis_height() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_rect_diagonal() {
        let p = project_rect(10.0, 10.0, 45.0);
        let expected = 10.0 * std::f64::consts::SQRT_2;
        assert!((p.axis_width() - expected).abs() < 1e-9);
        assert!((p.axis_height() - expected).abs() < 1e-9);
    }
}
