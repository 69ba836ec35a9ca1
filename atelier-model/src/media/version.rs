use std::fmt::Formatter;

use std::fmt::Display;

/// Named renditions exposed by the remote image service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImageVersion {
    Normalized,
    Larger,
    Large,
    Medium,
    Small,
}

impl Display for ImageVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ImageVersion {
    /// All renditions ordered by pixel size, largest first.
    ///
    /// Thumbnail resolution prefers the largest available rendition; the
    /// resize proxy scales it down to the requested dimensions, so picking
    /// big never costs bandwidth on the client.
    pub const BY_SIZE: [ImageVersion; 5] = [
        ImageVersion::Normalized,
        ImageVersion::Larger,
        ImageVersion::Large,
        ImageVersion::Medium,
        ImageVersion::Small,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ImageVersion::Normalized => "normalized",
            ImageVersion::Larger => "larger",
            ImageVersion::Large => "large",
            ImageVersion::Medium => "medium",
            ImageVersion::Small => "small",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "normalized" => Some(ImageVersion::Normalized),
            "larger" => Some(ImageVersion::Larger),
            "large" => Some(ImageVersion::Large),
            "medium" => Some(ImageVersion::Medium),
            "small" => Some(ImageVersion::Small),
            _ => None,
        }
    }

    /// Pick the best rendition for a thumbnail from the versions a record
    /// actually has, scanning [`ImageVersion::BY_SIZE`] in order.
    ///
    /// Returns `None` when nothing in `available` is a known rendition;
    /// callers decide how to fall back (and whether to report it).
    pub fn best_for_thumbnail(available: &[String]) -> Option<Self> {
        Self::BY_SIZE
            .iter()
            .copied()
            .find(|version| available.iter().any(|name| name == version.as_str()))
    }
}
