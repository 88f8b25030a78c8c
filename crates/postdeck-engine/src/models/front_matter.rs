use chrono::NaiveDate;
use serde::Deserialize;

/// Line that opens and closes a post's TOML front matter.
pub const FENCE: &str = "+++";

#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error("missing `+++` front matter")]
    MissingFrontMatter,
    #[error("unterminated front matter: no closing `+++` line")]
    UnterminatedFrontMatter,
    #[error("invalid front matter: {0}")]
    InvalidFrontMatter(#[from] toml::de::Error),
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("post has an empty slug")]
    EmptySlug,
}

/// Metadata block at the top of a post file.
#[derive(Debug, Clone, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    /// TOML date (`2024-04-02`) or a `"YYYY-MM-DD"` string.
    pub date: toml::Value,
    pub slug: Option<String>,
    pub thumbnail: Option<String>,
    pub song: Option<String>,
}

impl FrontMatter {
    pub fn parse(toml_src: &str) -> Result<Self, PostError> {
        Ok(toml::from_str(toml_src)?)
    }

    /// Resolves the `date` field to a calendar date. Times and offsets on a
    /// TOML datetime are ignored.
    pub fn date(&self) -> Result<NaiveDate, PostError> {
        match &self.date {
            toml::Value::Datetime(dt) => dt
                .date
                .and_then(|d| {
                    NaiveDate::from_ymd_opt(d.year.into(), d.month.into(), d.day.into())
                })
                .ok_or_else(|| PostError::InvalidDate(dt.to_string())),
            toml::Value::String(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                .map_err(|_| PostError::InvalidDate(s.clone())),
            other => Err(PostError::InvalidDate(other.to_string())),
        }
    }
}

/// Splits a post file into its front matter source and body.
///
/// The first line must be exactly [`FENCE`]; the front matter runs to the
/// next line that is exactly [`FENCE`]. A leading byte order mark and
/// trailing `\r` on fence lines are tolerated.
pub fn split_front_matter(text: &str) -> Result<(&str, &str), PostError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split_inclusive('\n');

    let first = lines.next().ok_or(PostError::MissingFrontMatter)?;
    if first.trim_end() != FENCE {
        return Err(PostError::MissingFrontMatter);
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == FENCE {
            return Ok((&text[start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(PostError::UnterminatedFrontMatter)
}
