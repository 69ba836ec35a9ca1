/// One still-image candidate as delivered by the upstream data layer.
///
/// This is intentionally loose: the upstream layer supplies partial records
/// (missing dimensions, missing URLs) and the selection engine is responsible
/// for deciding what is displayable. See [`ImageDescriptor::is_broken`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ImageDescriptor {
    pub url: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Named renditions available on the remote image service.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_versions: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "largeImageURL"))]
    pub large_image_url: Option<String>,
    pub deep_zoom: Option<DeepZoom>,
}

impl ImageDescriptor {
    /// Create a descriptor with the three fields every displayable image needs.
    pub fn new(
        url: impl Into<String>,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            url: Some(url.into()),
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn with_versions<I, S>(mut self, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.image_versions = versions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_large_image_url(mut self, url: impl Into<String>) -> Self {
        self.large_image_url = Some(url.into());
        self
    }

    pub fn with_deep_zoom(mut self, deep_zoom: DeepZoom) -> Self {
        self.deep_zoom = Some(deep_zoom);
        self
    }

    /// Whether the descriptor carries at least one named rendition.
    pub fn has_versions(&self) -> bool {
        !self.image_versions.is_empty()
    }

    /// A descriptor that cannot be displayed at all.
    ///
    /// Missing, empty, zero, and NaN values all count as broken; negative
    /// dimensions do not. This matches the truthiness check the data layer
    /// has always applied, so records that used to be dropped stay dropped.
    pub fn is_broken(&self) -> bool {
        let url_missing = self.url.as_deref().is_none_or(str::is_empty);
        let dim_missing =
            |dim: Option<f64>| dim.is_none_or(|value| value == 0.0 || value.is_nan());
        url_missing || dim_missing(self.width) || dim_missing(self.height)
    }
}

/// One video candidate. Videos are always complete records; the upstream
/// layer never emits partial videos, so no field is optional here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VideoDescriptor {
    pub width: f64,
    pub height: f64,
    pub url: String,
}

impl VideoDescriptor {
    pub fn new(url: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            url: url.into(),
        }
    }
}

/// Multi-resolution tiled image metadata for progressive zoom.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeepZoom {
    pub image: DeepZoomImage,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DeepZoomImage {
    pub tile_size: u32,
    pub url: String,
    pub format: String,
    pub size: PixelSize,
}

/// Integer pixel dimensions of a stored tile pyramid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}
