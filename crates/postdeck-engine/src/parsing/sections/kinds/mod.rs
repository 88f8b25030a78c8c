//! # Marker Kinds
//!
//! Types that own their syntax: the delimiters used to render a marker and
//! the pattern the scanner compiles to find one.

pub mod image_marker;

pub use image_marker::ImageMarker;
