use serde::Serialize;

use crate::models::Post;
use crate::parsing::{Image, Section};

/// Reference to a neighbouring post from the footer slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostLink {
    pub slug: String,
    pub title: String,
}

impl PostLink {
    pub fn route(&self) -> String {
        format!("/posts/{}", self.slug)
    }
}

impl From<&Post> for PostLink {
    fn from(post: &Post) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
        }
    }
}

/// One full-viewport slide of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slide {
    /// Opening slide: thumbnail, title and date.
    Title {
        title: String,
        date: String,
        thumbnail: Option<String>,
        song: Option<String>,
    },
    /// Prose with no image (an intro section).
    Text { text: String },
    /// An image with its caption.
    Image { image: Image, caption: String },
    /// Closing slide with links to the neighbouring posts and the post list.
    /// A missing neighbour renders as a disabled link.
    Footer {
        older: Option<PostLink>,
        newer: Option<PostLink>,
    },
}

impl Slide {
    pub fn title_for(post: &Post) -> Self {
        Slide::Title {
            title: post.title.clone(),
            date: post.display_date(),
            thumbnail: post.thumbnail.clone(),
            song: post.song.clone(),
        }
    }

    /// Image to open in the full-resolution viewer when the slide is
    /// activated: the thumbnail on the title slide, the section image on an
    /// image slide.
    pub fn viewer_src(&self) -> Option<&str> {
        match self {
            Slide::Title { thumbnail, .. } => thumbnail.as_deref(),
            Slide::Image { image, .. } if !image.src.is_empty() => Some(&image.src),
            _ => None,
        }
    }
}

impl From<Section> for Slide {
    fn from(section: Section) -> Self {
        match section {
            Section::Intro { text } => Slide::Text { text },
            Section::Pair { image, text } => Slide::Image {
                image,
                caption: text,
            },
        }
    }
}
