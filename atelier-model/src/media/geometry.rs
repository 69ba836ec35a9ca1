use crate::error::{ModelError, Result};

/// The display area media must be scaled to fit within.
///
/// Fields are plain `f64` so the selection engine can construct boxes from
/// arbitrary screen math; [`BoundingBox::new`] is the validated entry point
/// and rejects non-positive or non-finite dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if width <= 0.0 || height <= 0.0 || !width.is_finite() || !height.is_finite() {
            return Err(ModelError::InvalidBoundingBox { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Dimensions after contain-fitting a source into a [`BoundingBox`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FittedSize {
    pub width: f64,
    pub height: f64,
}

/// Scale `width`/`height` so the whole area fits inside `bounds`.
///
/// Standard contain geometry: one fitted dimension equals the corresponding
/// bound, the other is at most its bound, and the aspect ratio is preserved.
/// Sources smaller than the box are scaled up, not letterboxed at 1:1.
pub fn fit_inside(bounds: BoundingBox, width: f64, height: f64) -> FittedSize {
    let scale = (bounds.width / width).min(bounds.height / height);
    FittedSize {
        width: width * scale,
        height: height * scale,
    }
}

#[cfg(test)]
mod tests {
    use super::{BoundingBox, fit_inside};

    const EPSILON: f64 = 1e-9;

    fn bounds(width: f64, height: f64) -> BoundingBox {
        BoundingBox::new(width, height).unwrap()
    }

    #[test]
    fn wide_source_is_limited_by_width() {
        let fitted = fit_inside(bounds(200.0, 200.0), 100.0, 50.0);
        assert!((fitted.width - 200.0).abs() < EPSILON);
        assert!((fitted.height - 100.0).abs() < EPSILON);
    }

    #[test]
    fn tall_source_is_limited_by_height() {
        let fitted = fit_inside(bounds(400.0, 300.0), 100.0, 200.0);
        assert!((fitted.height - 300.0).abs() < EPSILON);
        assert!((fitted.width - 150.0).abs() < EPSILON);
    }

    #[test]
    fn oversized_source_is_scaled_down() {
        let fitted = fit_inside(bounds(375.0, 460.0), 3000.0, 2000.0);
        assert!(fitted.width <= 375.0 + EPSILON);
        assert!(fitted.height <= 460.0 + EPSILON);
        let source_ratio = 3000.0 / 2000.0;
        let fitted_ratio = fitted.width / fitted.height;
        assert!((source_ratio - fitted_ratio).abs() < EPSILON);
    }

    #[test]
    fn exact_fit_is_identity() {
        let fitted = fit_inside(bounds(640.0, 480.0), 640.0, 480.0);
        assert!((fitted.width - 640.0).abs() < EPSILON);
        assert!((fitted.height - 480.0).abs() < EPSILON);
    }

    #[test]
    fn bounding_box_rejects_degenerate_dimensions() {
        assert!(BoundingBox::new(0.0, 100.0).is_err());
        assert!(BoundingBox::new(100.0, -1.0).is_err());
        assert!(BoundingBox::new(f64::NAN, 100.0).is_err());
        assert!(BoundingBox::new(f64::INFINITY, 100.0).is_err());
    }
}
