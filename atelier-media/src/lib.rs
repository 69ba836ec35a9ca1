//! Media selection engine for the Atelier carousel.
//!
//! Takes the raw image and video descriptors the data layer hands us and
//! produces a display-ready [`MediaCollection`](atelier_model::MediaCollection):
//! broken records dropped, every image contain-fitted to the target bounding
//! box, thumbnail URLs resolved through the resize proxy, and the deep-zoom
//! deduplication policy applied.
//!
//! The whole pipeline is synchronous and pure. External effects (thumbnail
//! URL construction, diagnostics, device pixel density) enter through the
//! ports in [`ports`], so callers can stub them and memoize the result on
//! input equality.

pub mod diagnostics;
pub mod display;
pub mod error;
pub mod local;
pub mod ports;
pub mod resize_url;
pub mod selector;

pub use diagnostics::{NullDiagnostics, TracingDiagnostics};
pub use display::{
    DeviceClass, FixedPixelDensity, ScreenDimensions, TABLET_CARD_HEIGHT,
    embedded_card_bounding_box,
};
pub use error::{MediaError, Result};
pub use local::is_local_image_url;
pub use ports::{DiagnosticSink, PixelDensitySource, ThumbnailUrlSource};
pub use resize_url::ResizeProxyUrlBuilder;
pub use selector::MediaSelector;
