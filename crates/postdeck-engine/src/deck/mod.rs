//! # Deck
//!
//! Plans the slides of one post and tracks which slide is active.
//!
//! A deck is always `1 + sections + 1` slides long: the title slide, one
//! slide per body section, and the navigation footer. Navigation is clamped
//! to the deck; it never wraps.

pub mod slide;

pub use slide::{PostLink, Slide};

use crate::models::{Post, PostIndex};

#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    slides: Vec<Slide>,
    active: usize,
}

impl Deck {
    /// Builds the deck for `post`. `older` and `newer` feed the footer links.
    pub fn for_post(post: &Post, older: Option<&Post>, newer: Option<&Post>) -> Self {
        let sections = post.sections();
        let mut slides = Vec::with_capacity(sections.len() + 2);

        slides.push(Slide::title_for(post));
        slides.extend(sections.into_iter().map(Slide::from));
        slides.push(Slide::Footer {
            older: older.map(PostLink::from),
            newer: newer.map(PostLink::from),
        });

        Self { slides, active: 0 }
    }

    /// Builds the deck for the post at `index`, wiring up its neighbours.
    pub fn from_index(posts: &PostIndex, index: usize) -> Option<Self> {
        let post = posts.get(index)?;
        Some(Self::for_post(post, posts.older(index), posts.newer(index)))
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_slide(&self) -> &Slide {
        &self.slides[self.active]
    }

    fn last(&self) -> usize {
        self.slides.len().saturating_sub(1)
    }

    /// Moves to `index`, clamped to the deck. Returns whether the active
    /// slide changed.
    pub fn go_to(&mut self, index: usize) -> bool {
        let target = index.min(self.last());
        let moved = target != self.active;
        self.active = target;
        moved
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.active.saturating_add(1))
    }

    pub fn previous(&mut self) -> bool {
        self.go_to(self.active.saturating_sub(1))
    }

    pub fn first(&mut self) -> bool {
        self.go_to(0)
    }

    pub fn end(&mut self) -> bool {
        self.go_to(self.last())
    }

    /// Slide index for a scroll offset along the snapping axis, where each
    /// slide is `extent` long. Rounds to the nearest slide and clamps.
    pub fn index_for_offset(&self, offset: f64, extent: f64) -> usize {
        if extent.is_nan() || extent <= 0.0 || offset.is_nan() || offset <= 0.0 {
            return 0;
        }
        let index = (offset / extent).round();
        if index >= self.last() as f64 {
            self.last()
        } else {
            index as usize
        }
    }

    /// Syncs the active slide with a scroll position.
    pub fn scroll_to_offset(&mut self, offset: f64, extent: f64) -> bool {
        self.go_to(self.index_for_offset(offset, extent))
    }

    /// Scroll offset that snaps `index` into view.
    pub fn offset_for_index(&self, index: usize, extent: f64) -> f64 {
        index.min(self.last()) as f64 * extent
    }

    /// Reading progress in `[0, 1]`: 0 on the title slide, 1 on the footer.
    pub fn progress(&self) -> f64 {
        match self.last() {
            0 => 0.0,
            last => self.active as f64 / last as f64,
        }
    }
}
