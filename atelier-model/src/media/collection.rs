use crate::media::descriptor::{DeepZoom, VideoDescriptor};

/// A still image after contain-fitting and thumbnail URL resolution.
///
/// Unlike [`crate::ImageDescriptor`], every field a renderer needs is
/// guaranteed present; descriptors that could not satisfy that are dropped
/// during selection rather than surfaced half-filled.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FittedImage {
    pub url: String,
    pub width: f64,
    pub height: f64,
    #[cfg_attr(feature = "serde", serde(rename = "largeImageURL"))]
    pub large_image_url: Option<String>,
    pub deep_zoom: Option<DeepZoom>,
}

impl FittedImage {
    pub fn has_deep_zoom(&self) -> bool {
        self.deep_zoom.is_some()
    }
}

/// A video ready for display. Videos keep their source dimensions; they are
/// never contain-fitted or routed through the resize proxy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Video {
    pub width: f64,
    pub height: f64,
    pub url: String,
}

impl From<&VideoDescriptor> for Video {
    fn from(descriptor: &VideoDescriptor) -> Self {
        Self {
            width: descriptor.width,
            height: descriptor.height,
            url: descriptor.url.clone(),
        }
    }
}

/// One entry in the combined presentation order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaItem {
    Image(FittedImage),
    Video(Video),
}

impl MediaItem {
    pub fn url(&self) -> &str {
        match self {
            MediaItem::Image(image) => &image.url,
            MediaItem::Video(video) => &video.url,
        }
    }

    pub fn width(&self) -> f64 {
        match self {
            MediaItem::Image(image) => image.width,
            MediaItem::Video(video) => video.width,
        }
    }

    pub fn height(&self) -> f64 {
        match self {
            MediaItem::Image(image) => image.height,
            MediaItem::Video(video) => video.height,
        }
    }
}

/// The display-ready output of media selection.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MediaCollection {
    pub images: Vec<FittedImage>,
    pub videos: Vec<Video>,
    /// Set when any source image was a local file; the full-screen tiled
    /// zoom viewer cannot serve local assets, so callers should not offer it.
    pub disable_deep_zoom: bool,
}

impl MediaCollection {
    pub fn len(&self) -> usize {
        self.images.len() + self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.videos.is_empty()
    }

    /// Combined presentation order. Images lead by default; passing
    /// `video_as_cover` puts the videos first so a trailer can open the
    /// carousel.
    pub fn media(&self, video_as_cover: bool) -> Vec<MediaItem> {
        let images = self.images.iter().cloned().map(MediaItem::Image);
        let videos = self.videos.iter().cloned().map(MediaItem::Video);
        if video_as_cover {
            videos.chain(images).collect()
        } else {
            images.chain(videos).collect()
        }
    }
}
