pub mod deck;
pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use deck::{Deck, PostLink, Slide};
pub use io::*;
pub use models::{Post, PostError, PostIndex};
pub use parsing::{Image, Section, image_markers, sectionize};
