//! Display-name extraction for image URLs.

use url::Url;

/// Return the final path segment of a URL for use as a display caption.
///
/// `https://host/images/cat.png?x=1` yields `cat.png`. Anything that fails
/// to parse as an absolute URL, or has no final segment, yields the empty
/// string; this function never errors.
pub fn image_name_from_url(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed
                .path_segments()
                .and_then(|mut segments| segments.next_back().map(str::to_string))
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_final_segment() {
        assert_eq!(
            image_name_from_url("https://host/path/to/image123.jpg?x=1"),
            "image123.jpg"
        );
    }

    #[test]
    fn test_single_segment_path() {
        assert_eq!(image_name_from_url("https://host/banner.png"), "banner.png");
    }

    #[test]
    fn test_query_and_fragment_are_dropped() {
        assert_eq!(
            image_name_from_url("https://host/a/b.webp?size=large#top"),
            "b.webp"
        );
    }

    #[test]
    fn test_unparseable_input_yields_empty() {
        assert_eq!(image_name_from_url("not a url"), "");
        assert_eq!(image_name_from_url(""), "");
    }

    #[test]
    fn test_trailing_slash_yields_empty() {
        assert_eq!(image_name_from_url("https://host/images/"), "");
    }

    #[test]
    fn test_bare_host_yields_empty() {
        assert_eq!(image_name_from_url("https://host"), "");
    }
}
