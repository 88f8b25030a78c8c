use chrono::NaiveDate;
use serde::Serialize;

use super::front_matter::{FrontMatter, PostError, split_front_matter};
use crate::parsing::{Section, sectionize};

/// A blog post: metadata from the front matter plus the raw body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub thumbnail: Option<String>,
    /// Song reference (a URL) for the music player; carried, never played.
    pub song: Option<String>,
    /// Raw body, fed to the sectionizer.
    pub content: String,
}

impl Post {
    /// Parses a post file. `default_slug` is used when the front matter
    /// does not set one, typically the file stem.
    pub fn parse(source: &str, default_slug: &str) -> Result<Self, PostError> {
        let (front_matter, body) = split_front_matter(source)?;
        let meta = FrontMatter::parse(front_matter)?;
        let date = meta.date()?;

        let slug = meta
            .slug
            .as_deref()
            .unwrap_or(default_slug)
            .trim()
            .to_string();
        if slug.is_empty() {
            return Err(PostError::EmptySlug);
        }

        Ok(Self {
            slug,
            title: meta.title,
            date,
            thumbnail: non_blank(meta.thumbnail),
            song: non_blank(meta.song),
            content: body.to_string(),
        })
    }

    /// Body split into slide sections. Built fresh on every call.
    pub fn sections(&self) -> Vec<Section> {
        sectionize(&self.content)
    }

    /// Date as shown on the title slide, US style without padding (`4/2/2024`).
    pub fn display_date(&self) -> String {
        self.date.format("%-m/%-d/%Y").to_string()
    }

    pub fn route(&self) -> String {
        format!("/posts/{}", self.slug)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
