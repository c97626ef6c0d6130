//! Post and Comment models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Stable unique identifier
    pub id: String,

    /// Post title
    pub title: String,

    /// Slug (URL-friendly name, unique)
    pub slug: String,

    /// Short summary shown in listings
    pub excerpt: String,

    /// Raw content body
    pub content: String,

    /// Publication date as displayed (not parsed)
    pub date: String,

    /// Post tags in author order
    pub tags: Vec<String>,

    /// Display read time, e.g. "5 min read"
    pub read_time: String,

    /// Whether the post is featured
    #[serde(default)]
    pub featured: bool,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        let slug = slug::slugify(&title);
        Self {
            id: id.into(),
            title,
            slug,
            excerpt: String::new(),
            content: String::new(),
            date: String::new(),
            tags: Vec::new(),
            read_time: String::new(),
            featured: false,
        }
    }

    /// URL path of the post's detail page (without root)
    pub fn path(&self) -> String {
        format!("blog/{}/", self.slug)
    }

    /// Whether the post carries `tag` (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Find a post by its slug
pub fn find_by_slug<'a>(posts: &'a [Post], slug: &str) -> Option<&'a Post> {
    posts.iter().find(|p| p.slug == slug)
}

/// Posts other than `current`, in dataset order, at most `limit`
pub fn related_posts<'a>(posts: &'a [Post], current: &Post, limit: usize) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|p| p.id != current.id)
        .take(limit)
        .collect()
}

/// A reader comment, only ever held by the current post view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub name: String,
    pub content: String,
    pub date: String,
}

impl Comment {
    /// Create a comment stamped with a fresh id and the given display date
    pub fn new(name: String, content: String, date: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            content,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Post> {
        (1..=4)
            .map(|i| Post::new(i.to_string(), format!("Post Number {}", i)))
            .collect()
    }

    #[test]
    fn test_new_post_slugifies_title() {
        let post = Post::new("1", "Mastering Golang: A Backend Developer's Perspective");
        assert_eq!(post.slug, "mastering-golang-a-backend-developer-s-perspective");
        assert!(!post.featured);
        assert_eq!(post.path(), format!("blog/{}/", post.slug));
    }

    #[test]
    fn test_find_by_slug() {
        let posts = sample();
        assert_eq!(find_by_slug(&posts, "post-number-3").unwrap().id, "3");
        assert!(find_by_slug(&posts, "missing").is_none());
        assert!(find_by_slug(&[], "post-number-3").is_none());
    }

    #[test]
    fn test_related_posts_skips_current() {
        let posts = sample();
        let related = related_posts(&posts, &posts[0], 2);
        let ids: Vec<_> = related.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);

        let related = related_posts(&posts, &posts[2], 5);
        let ids: Vec<_> = related.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4"]);
    }

    #[test]
    fn test_comment_ids_are_unique() {
        let a = Comment::new("A".into(), "hi".into(), "1/1/2025".into());
        let b = Comment::new("A".into(), "hi".into(), "1/1/2025".into());
        assert_ne!(a.id, b.id);
    }
}
