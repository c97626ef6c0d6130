//! Errors raised while loading the post dataset

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read {source_name}: {error}")]
    Io {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    #[error("Invalid front-matter in {source_name}: {error}")]
    FrontMatter {
        source_name: String,
        #[source]
        error: serde_yaml::Error,
    },

    #[error("Missing required field `{field}` in {source_name}")]
    MissingField {
        source_name: String,
        field: &'static str,
    },

    #[error("Slug `{slug}` in {source_name} is not URL-safe (expected `{expected}`)")]
    InvalidSlug {
        source_name: String,
        slug: String,
        expected: String,
    },

    #[error("Duplicate post id `{id}` in {first} and {second}")]
    DuplicateId {
        id: String,
        first: String,
        second: String,
    },

    #[error("Duplicate post slug `{slug}` in {first} and {second}")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },
}
