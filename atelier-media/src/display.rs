//! Display configuration for the embedded carousel card.
//!
//! Device-class branching is passed in explicitly rather than read from
//! ambient device globals, so the bounding-box math stays a pure function.

use atelier_model::BoundingBox;

use crate::ports::PixelDensitySource;

/// Tablet-class devices pin the embedded card to this height; the caller's
/// requested height only applies on phones.
pub const TABLET_CARD_HEIGHT: f64 = 460.0;

/// Coarse device classification driving layout overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Phone,
    Tablet,
}

/// Logical screen dimensions in display points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenDimensions {
    pub width: f64,
    pub height: f64,
}

/// Bounding box for the embedded carousel card.
///
/// The card always spans the full screen width. Height is the requested card
/// height on phones and [`TABLET_CARD_HEIGHT`] on tablets.
pub fn embedded_card_bounding_box(
    screen: ScreenDimensions,
    device: DeviceClass,
    card_height: f64,
) -> BoundingBox {
    let height = match device {
        DeviceClass::Phone => card_height,
        DeviceClass::Tablet => TABLET_CARD_HEIGHT,
    };
    BoundingBox {
        width: screen.width,
        height,
    }
}

/// [`PixelDensitySource`] with a caller-supplied constant multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPixelDensity(pub f64);

impl FixedPixelDensity {
    /// 1:1 logical-to-physical pixels.
    pub const STANDARD: Self = Self(1.0);
}

impl PixelDensitySource for FixedPixelDensity {
    fn scale_factor(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{
        DeviceClass, ScreenDimensions, TABLET_CARD_HEIGHT, embedded_card_bounding_box,
    };

    const SCREEN: ScreenDimensions = ScreenDimensions {
        width: 390.0,
        height: 844.0,
    };

    #[test]
    fn phones_use_the_requested_card_height() {
        let bounds = embedded_card_bounding_box(SCREEN, DeviceClass::Phone, 280.0);
        assert_eq!(bounds.width, 390.0);
        assert_eq!(bounds.height, 280.0);
    }

    #[test]
    fn tablets_override_the_requested_card_height() {
        let bounds = embedded_card_bounding_box(SCREEN, DeviceClass::Tablet, 280.0);
        assert_eq!(bounds.width, 390.0);
        assert_eq!(bounds.height, TABLET_CARD_HEIGHT);
    }
}
