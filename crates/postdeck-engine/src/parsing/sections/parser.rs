use super::{scanner::scan_markers, types::Section};

/// Splits a post body into sections around its image markers.
///
/// # Assignment rules
/// - Trimmed text before the first marker becomes a single
///   [`Section::Intro`]; whitespace-only leading text produces nothing.
/// - Every marker opens a [`Section::Pair`]. The trimmed text between
///   marker *i* and marker *i + 1* (or end of input) belongs to marker *i*.
/// - A body without markers becomes one `Intro`, or nothing when blank.
///
/// Never fails. Incomplete markers stay in the text of whichever section
/// owns their span.
pub fn sectionize(content: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut consumed = 0;

    for marker in scan_markers(content) {
        let before = trim_prose(&content[consumed..marker.full.start]);
        assign_text(&mut sections, before);
        sections.push(Section::Pair {
            image: marker.image,
            text: String::new(),
        });
        consumed = marker.full.end;
    }

    assign_text(&mut sections, trim_prose(&content[consumed..]));
    sections
}

/// Gives `text` to the open pair, or to a new intro when nothing has been
/// emitted yet.
fn assign_text(sections: &mut Vec<Section>, text: &str) {
    if let Some(Section::Pair { text: slot, .. }) = sections.last_mut() {
        *slot = text.to_string();
    } else if sections.is_empty() && !text.is_empty() {
        sections.push(Section::Intro {
            text: text.to_string(),
        });
    }
}

/// Trims whitespace and stray byte order marks.
fn trim_prose(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
