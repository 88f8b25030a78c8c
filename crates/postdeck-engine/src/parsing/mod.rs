//! # Parsing
//!
//! Turns raw post bodies into the structures the deck planner renders.
//! The only construct recognised today is the inline image marker
//! `![alt](src)`; everything else is prose.

pub mod sections;

pub use sections::{Image, Section, image_markers, sectionize};
