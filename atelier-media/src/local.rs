use std::sync::LazyLock;

use regex::Regex;

// The leading character class matches any single listed character, not the
// literal `asset://` / `file:///` prefixes. That makes the check far more
// permissive than the prefix list suggests (anything starting with `.`, `/`,
// or a letter of those schemes can qualify). Callers rely on the permissive
// behavior, so do not rewrite this as a prefix alternation.
static LOCAL_IMAGE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[.|/|asset://|file:///].*.[/.](gif|jpg|jpeg|bmp|webp|png)$")
        .expect("local image pattern is valid")
});

/// Whether a URL refers to a bundled or on-device raster image rather than a
/// remote one. Local images skip version resolution and the resize proxy, and
/// their presence disables the deep-zoom viewer for the whole collection.
///
/// Case-sensitive; only raster extensions count (no mp4, no svg).
pub fn is_local_image_url(url: &str) -> bool {
    LOCAL_IMAGE_URL.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::is_local_image_url;

    #[test]
    fn detects_relative_and_absolute_paths() {
        assert!(is_local_image_url("./images/photo.jpg"));
        assert!(is_local_image_url("../shared/banner.webp"));
        assert!(is_local_image_url("/var/mobile/Containers/pic.png"));
    }

    #[test]
    fn detects_local_scheme_urls() {
        assert!(is_local_image_url("asset://bundled/artwork.gif"));
        assert!(is_local_image_url("file:///tmp/capture.jpeg"));
    }

    #[test]
    fn rejects_remote_urls() {
        assert!(!is_local_image_url("https://img.example/photo.jpg"));
        assert!(!is_local_image_url("http://img.example/photo.png"));
    }

    #[test]
    fn only_raster_extensions_count() {
        assert!(!is_local_image_url("/videos/clip.mp4"));
        assert!(!is_local_image_url("./vector/logo.svg"));
        // Case-sensitive by contract.
        assert!(!is_local_image_url("/photos/SCAN.JPG"));
    }

    // The character-class quirk: any leading character drawn from the scheme
    // spellings qualifies, so bare names like these count as local. Pinned so
    // a tightening of the pattern is a deliberate, visible change.
    #[test]
    fn permissive_matches_are_preserved() {
        assert!(is_local_image_url("aa.jpg"));
        assert!(is_local_image_url("temp.file.png"));
        assert!(!is_local_image_url("x.jpg")); // `x` is not in the class
        assert!(!is_local_image_url("a.jpg")); // too short for `.*.[/.]ext`
    }
}
