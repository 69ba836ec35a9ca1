//! Core data model definitions shared across Atelier crates.
#![allow(missing_docs)]

pub mod error;
pub mod media;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use media::{
    BoundingBox, DeepZoom, DeepZoomImage, FittedImage, FittedSize,
    ImageDescriptor, ImageVersion, MediaCollection, MediaItem, PixelSize,
    Video, VideoDescriptor, fit_inside,
};
