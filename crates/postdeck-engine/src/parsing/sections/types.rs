use serde::Serialize;

/// Byte range into the scanned post body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// The image reference carried by a `![alt](src)` marker.
///
/// Either field may be empty; `![]()` is still a marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub alt: String,
    pub src: String,
}

/// One image marker found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Full span including `![` and the closing `)`.
    pub full: Span,
    pub image: Image,
}

/// One slide-sized unit of a post body.
///
/// Serialized as a map tagged with `kind: intro | pair`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    /// Prose before the first image marker (or the whole body when there
    /// are no markers). Never empty.
    Intro { text: String },
    /// An image and the trimmed prose that follows it, up to the next
    /// marker or end of input. The text may be empty.
    Pair { image: Image, text: String },
}

impl Section {
    pub fn text(&self) -> &str {
        match self {
            Section::Intro { text } | Section::Pair { text, .. } => text,
        }
    }

    pub fn image(&self) -> Option<&Image> {
        match self {
            Section::Intro { .. } => None,
            Section::Pair { image, .. } => Some(image),
        }
    }

    pub fn is_intro(&self) -> bool {
        matches!(self, Section::Intro { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(alt: &str, src: &str, text: &str) -> Section {
        Section::Pair {
            image: Image {
                alt: alt.into(),
                src: src.into(),
            },
            text: text.into(),
        }
    }

    #[test]
    fn accessors_on_intro() {
        let s = Section::Intro {
            text: "hello".into(),
        };
        assert_eq!(s.text(), "hello");
        assert!(s.image().is_none());
        assert!(s.is_intro());
    }

    #[test]
    fn accessors_on_pair() {
        let s = pair("a", "x.jpg", "caption");
        assert_eq!(s.text(), "caption");
        assert_eq!(s.image().map(|i| i.src.as_str()), Some("x.jpg"));
        assert!(!s.is_intro());
    }

    #[test]
    fn pair_with_empty_fields_is_still_a_pair() {
        let s = pair("", "", "");
        assert!(!s.is_intro());
        assert_eq!(s.image().map(|i| i.alt.as_str()), Some(""));
    }
}
