//! Blog listing session

use serde::Serialize;

use crate::content::filter::{all_tags, filter_posts, toggle_tag};
use crate::content::Post;

/// Search and tag state of one blog listing view
#[derive(Debug)]
pub struct BlogView<'a> {
    posts: &'a [Post],
    search: String,
    selected_tag: Option<String>,
}

/// Summary numbers shown under the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogStats {
    pub articles: usize,
    pub topics: usize,
    pub years_experience: u32,
}

impl<'a> BlogView<'a> {
    /// Open a listing over `posts` with no filters applied
    pub fn new(posts: &'a [Post]) -> Self {
        Self {
            posts,
            search: String::new(),
            selected_tag: None,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selected_tag(&self) -> Option<&str> {
        self.selected_tag.as_deref()
    }

    /// Replace the search text
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Select a tag, or clear it if it is the one already selected
    pub fn toggle_tag(&mut self, tag: &str) {
        self.selected_tag = toggle_tag(self.selected_tag.as_deref(), tag);
        tracing::debug!("Selected tag: {:?}", self.selected_tag);
    }

    /// Reset both search text and tag
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.selected_tag = None;
    }

    /// Posts matching the current filters
    pub fn visible_posts(&self) -> Vec<&'a Post> {
        filter_posts(self.posts, &self.search, self.selected_tag.as_deref())
    }

    /// Whether the current filters hide every post
    pub fn is_empty(&self) -> bool {
        self.visible_posts().is_empty()
    }

    /// Every tag across the dataset, in first-occurrence order
    pub fn tags(&self) -> Vec<&'a str> {
        all_tags(self.posts).into_iter().collect()
    }

    pub fn stats(&self, years_experience: u32) -> BlogStats {
        BlogStats {
            articles: self.posts.len(),
            topics: all_tags(self.posts).len(),
            years_experience,
        }
    }
}
