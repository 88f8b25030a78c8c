/// Inline image marker `![alt](src)`.
///
/// Alt text and source are both shortest matches, and neither may cross a
/// line break: `\n`, `\r`, U+2028 or U+2029.
pub struct ImageMarker;

impl ImageMarker {
    pub const OPEN: &'static str = "![";
    pub const MIDDLE: &'static str = "](";
    pub const CLOSE: &'static str = ")";

    /// Leftmost-first, non-greedy pattern with the alt text in group 1 and
    /// the source in group 2.
    pub const PATTERN: &'static str =
        r"!\[([^\n\r\x{2028}\x{2029}]*?)\]\(([^\n\r\x{2028}\x{2029}]*?)\)";

    /// Renders an alt/src pair back into marker syntax.
    pub fn render(alt: &str, src: &str) -> String {
        format!("{}{alt}{}{src}{}", Self::OPEN, Self::MIDDLE, Self::CLOSE)
    }
}
