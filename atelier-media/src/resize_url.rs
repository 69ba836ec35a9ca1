use url::Url;

use crate::error::Result;
use crate::ports::ThumbnailUrlSource;

const DEFAULT_QUALITY: u8 = 80;

/// Default [`ThumbnailUrlSource`]: an image resize proxy addressed entirely
/// through query parameters (`resize_to`, `width`, `height`, `quality`,
/// `src`).
///
/// Target dimensions arrive as floats from the fitting math; the proxy wants
/// integer pixels, so they are rounded here rather than truncated.
#[derive(Debug, Clone)]
pub struct ResizeProxyUrlBuilder {
    base: Url,
    quality: u8,
}

impl ResizeProxyUrlBuilder {
    /// Parse and validate the proxy base URL.
    pub fn new(base: &str) -> Result<Self> {
        Ok(Self {
            base: Url::parse(base)?,
            quality: DEFAULT_QUALITY,
        })
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }
}

impl ThumbnailUrlSource for ResizeProxyUrlBuilder {
    fn thumbnail_url(&self, templated_url: &str, target_width: f64, target_height: f64) -> String {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("resize_to", "fit")
            .append_pair("width", &(target_width.round() as u64).to_string())
            .append_pair("height", &(target_height.round() as u64).to_string())
            .append_pair("quality", &self.quality.to_string())
            .append_pair("src", templated_url);
        url.into()
    }
}
