//! View sessions
//!
//! Each page view owns its transient state explicitly: the blog listing's
//! search text and selected tag, a post page's comments, the contact form.
//! A session is created when the view opens and dropped when it closes;
//! nothing outlives it.

mod blog;
mod contact;
mod post;

pub use blog::{BlogStats, BlogView};
pub use contact::{ContactForm, Toast};
pub use post::{CommentDraft, PostView};

use thiserror::Error;

/// Reasons a form submission is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("`{0}` is required")]
    Required(&'static str),

    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),

    #[error("`{0}` is not a valid date format")]
    DateFormat(String),
}

/// Require a non-blank value
pub(crate) fn required(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(())
    }
}
