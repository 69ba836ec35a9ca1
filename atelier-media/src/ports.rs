//! Collaborator ports for the selection engine.
//!
//! Everything behind these traits is synchronous and side-effect isolated:
//! selection runs on every render of its caller, so a port implementation
//! must never block, and nothing a port does may influence the returned
//! collection (diagnostics in particular are fire-and-forget).

/// Builds a fetchable thumbnail URL for a version-resolved source URL.
///
/// `target_width`/`target_height` are the on-screen fitted dimensions already
/// multiplied by the device pixel density, so implementations request enough
/// pixels for the physical display without knowing anything about devices.
pub trait ThumbnailUrlSource: Send + Sync {
    fn thumbnail_url(&self, templated_url: &str, target_width: f64, target_height: f64) -> String;
}

/// Receives non-fatal observations from the engine.
///
/// Implementations must not panic; callers never observe the outcome.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, message: &str);
}

/// Supplies the device's physical-to-logical pixel multiplier.
pub trait PixelDensitySource: Send + Sync {
    fn scale_factor(&self) -> f64;
}
