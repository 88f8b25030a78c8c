pub mod front_matter;
pub mod post;
pub mod post_index;

pub use front_matter::{FrontMatter, PostError};
pub use post::Post;
pub use post_index::{PostIndex, sort_newest_first};
