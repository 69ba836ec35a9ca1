use std::fmt;
use std::sync::Arc;

use atelier_model::{
    BoundingBox, FittedImage, ImageDescriptor, ImageVersion, MediaCollection,
    Video, VideoDescriptor, fit_inside,
};
use tracing::debug;

use crate::local::is_local_image_url;
use crate::ports::{DiagnosticSink, PixelDensitySource, ThumbnailUrlSource};

/// Placeholder token the upstream data layer embeds in templated image URLs.
const VERSION_TOKEN: &str = ":version";

/// Transforms raw media descriptors into a display-ready [`MediaCollection`].
///
/// Selection is a pure function of its inputs: the same descriptors and
/// bounding box always produce the same collection, so callers invoking it on
/// every render may memoize on input equality. The injected ports are the
/// only boundary; see [`crate::ports`] for their contracts.
pub struct MediaSelector {
    thumbnails: Arc<dyn ThumbnailUrlSource>,
    diagnostics: Arc<dyn DiagnosticSink>,
    pixel_density: Arc<dyn PixelDensitySource>,
}

impl fmt::Debug for MediaSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaSelector").finish_non_exhaustive()
    }
}

impl MediaSelector {
    pub fn new(
        thumbnails: Arc<dyn ThumbnailUrlSource>,
        diagnostics: Arc<dyn DiagnosticSink>,
        pixel_density: Arc<dyn PixelDensitySource>,
    ) -> Self {
        Self {
            thumbnails,
            diagnostics,
            pixel_density,
        }
    }

    /// Produce the display-ready collection for one carousel.
    ///
    /// Never fails and never panics: broken image descriptors are dropped,
    /// empty inputs yield an empty collection, and the only diagnostic (a
    /// record with no usable rendition) is reported through the sink while
    /// selection continues with a fallback.
    pub fn select(
        &self,
        images: &[ImageDescriptor],
        videos: &[VideoDescriptor],
        bounds: BoundingBox,
    ) -> MediaCollection {
        // Local images are judged on source URLs, before any dropping, so a
        // broken local record still disables deep zoom for the collection.
        let disable_deep_zoom = images
            .iter()
            .any(|image| image.url.as_deref().is_some_and(is_local_image_url));

        let mut fitted: Vec<FittedImage> = images
            .iter()
            .filter_map(|image| self.fit_image(image, bounds))
            .collect();

        if !disable_deep_zoom {
            fitted = dedupe_by_deep_zoom(fitted);
        }

        let videos = videos.iter().map(Video::from).collect();

        MediaCollection {
            images: fitted,
            videos,
            disable_deep_zoom,
        }
    }

    fn fit_image(&self, image: &ImageDescriptor, bounds: BoundingBox) -> Option<FittedImage> {
        if image.is_broken() {
            return None;
        }

        // `is_broken` guarantees these are present.
        let source_url = image.url.as_deref()?;
        let (width, height) = (image.width?, image.height?);

        let fitted = fit_inside(bounds, width, height);

        let url = if is_local_image_url(source_url) || !image.has_versions() {
            source_url.to_string()
        } else {
            let version = ImageVersion::best_for_thumbnail(&image.image_versions)
                .unwrap_or_else(|| {
                    // The proxy will most likely 404 on the fallback, but a
                    // gray tile beats dropping the artwork outright.
                    self.diagnostics
                        .report("no appropriate image version found for thumbnail");
                    ImageVersion::Normalized
                });
            // Upscale the request to match the physical screen resolution.
            let scale = self.pixel_density.scale_factor();
            self.thumbnails.thumbnail_url(
                &source_url.replacen(VERSION_TOKEN, version.as_str(), 1),
                fitted.width * scale,
                fitted.height * scale,
            )
        };

        let large_image_url = image
            .large_image_url
            .clone()
            .or_else(|| Some(source_url.to_string()));

        Some(FittedImage {
            url,
            width: fitted.width,
            height: fitted.height,
            large_image_url,
            deep_zoom: image.deep_zoom.clone(),
        })
    }
}

/// Deep-zoom deduplication policy.
///
/// When every image carries deep-zoom data (or the list is empty) nothing
/// changes. When the set is mixed, only deep-zoom-bearing images survive;
/// if that would leave nothing, the first fitted image is kept instead so
/// the carousel never goes blank on valid input.
fn dedupe_by_deep_zoom(fitted: Vec<FittedImage>) -> Vec<FittedImage> {
    if fitted.iter().all(FittedImage::has_deep_zoom) {
        return fitted;
    }

    let kept: Vec<FittedImage> = fitted
        .iter()
        .filter(|image| image.has_deep_zoom())
        .cloned()
        .collect();

    if kept.is_empty() {
        fitted.into_iter().take(1).collect()
    } else {
        debug!(
            kept = kept.len(),
            dropped = fitted.len() - kept.len(),
            "dropped carousel images without deep zoom data"
        );
        kept
    }
}
