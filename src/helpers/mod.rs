//! Helper functions for pages
//!
//! URL building, share links and HTML fragments used by the generator and
//! the CLI.

mod html;
mod url;

pub use html::*;
pub use url::*;
