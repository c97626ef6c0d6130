//! Post search and tag filtering

use indexmap::{IndexMap, IndexSet};

use super::Post;

/// Case-insensitive substring match against title or excerpt
pub fn matches_query(post: &Post, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    post.title.to_lowercase().contains(&query) || post.excerpt.to_lowercase().contains(&query)
}

/// Exact tag membership; no tag matches everything
pub fn matches_tag(post: &Post, tag: Option<&str>) -> bool {
    tag.map_or(true, |t| post.has_tag(t))
}

/// Posts matching both the query and the tag, in their original order
pub fn filter_posts<'a>(posts: &'a [Post], query: &str, tag: Option<&str>) -> Vec<&'a Post> {
    let query = query.to_lowercase();
    posts
        .iter()
        .filter(|post| matches_query(post, &query) && matches_tag(post, tag))
        .collect()
}

/// All distinct tags in order of first occurrence
pub fn all_tags(posts: &[Post]) -> IndexSet<&str> {
    posts
        .iter()
        .flat_map(|post| post.tags.iter().map(String::as_str))
        .collect()
}

/// Number of posts per tag, in order of first occurrence
pub fn tag_counts(posts: &[Post]) -> IndexMap<&str, usize> {
    let mut counts = IndexMap::new();
    for tag in posts.iter().flat_map(|post| post.tags.iter()) {
        *counts.entry(tag.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Select `tag`, or clear the selection when it is already selected
pub fn toggle_tag(selected: Option<&str>, tag: &str) -> Option<String> {
    if selected == Some(tag) {
        None
    } else {
        Some(tag.to_string())
    }
}
