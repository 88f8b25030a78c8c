use std::sync::OnceLock;

use regex::Regex;

use super::{
    kinds::ImageMarker,
    types::{Image, Marker, Span},
};

fn marker_regex() -> &'static Regex {
    static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
    MARKER_REGEX
        .get_or_init(|| Regex::new(ImageMarker::PATTERN).expect("Invalid image marker regex"))
}

/// Scans `content` for image markers in document order.
///
/// Matches never overlap and the scan never backtracks over a match it has
/// already returned. Incomplete markers such as `![broken(x.jpg)` are not
/// reported; they stay part of the surrounding prose.
pub fn scan_markers(content: &str) -> impl Iterator<Item = Marker> + '_ {
    marker_regex().captures_iter(content).filter_map(|caps| {
        let full = caps.get(0)?;
        let group = |i| caps.get(i).map_or("", |m| m.as_str());
        Some(Marker {
            full: Span {
                start: full.start(),
                end: full.end(),
            },
            image: Image {
                alt: group(1).to_string(),
                src: group(2).to_string(),
            },
        })
    })
}

/// Returns every image referenced in `content`, in document order.
pub fn image_markers(content: &str) -> Vec<Image> {
    scan_markers(content).map(|m| m.image).collect()
}
