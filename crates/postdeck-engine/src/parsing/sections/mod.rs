//! # Sections
//!
//! Splits a post body into slide-sized sections around its image markers.
//!
//! ## Model
//!
//! A post reads as "image, then its caption": every `![alt](src)` marker
//! opens a [`Section::Pair`] and the prose that follows it (up to the next
//! marker or end of input) becomes that pair's text. Prose before the first
//! marker is the only text that can become a [`Section::Intro`].
//!
//! ## Modules
//!
//! - **`types`**: `Section`, `Image` and the `Marker` scan result
//! - **`kinds`**: `ImageMarker`, which owns the marker delimiters
//! - **`scanner`**: forward scan for markers in document order
//! - **`parser`**: `sectionize()` main entry point
//!
//! ## Purity
//!
//! Nothing here touches I/O or shared mutable state. The compiled marker
//! pattern is an immutable lazily-initialised static.

pub mod kinds;
pub mod parser;
pub mod scanner;
pub mod types;

pub use parser::sectionize;
pub use scanner::{image_markers, scan_markers};
pub use types::{Image, Marker, Section, Span};
