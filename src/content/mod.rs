//! Content module - posts, the post filter, and the content renderer

mod error;
pub mod filter;
mod frontmatter;
pub mod loader;
pub mod markdown;
mod post;

pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use markdown::{render, HeadingLevel, Segment};
pub use post::{find_by_slug, related_posts, Comment, Post};
