//! Post detail session with its in-memory comment list

use chrono::Local;
use std::fmt::Write as _;

use super::{required, FormError};
use crate::content::{find_by_slug, related_posts, render, Comment, Post, Segment};

/// Comment form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub name: String,
    /// Optional; never stored on the comment
    pub email: String,
    pub body: String,
}

/// One open post page
#[derive(Debug)]
pub struct PostView<'a> {
    posts: &'a [Post],
    post: &'a Post,
    comments: Vec<Comment>,
    pub draft: CommentDraft,
    date_format: String,
}

impl<'a> PostView<'a> {
    /// Open the post with `slug`; `None` sends the reader back to the listing
    pub fn open(posts: &'a [Post], slug: &str, date_format: &str) -> Option<Self> {
        let post = find_by_slug(posts, slug)?;
        tracing::debug!("Opened post {}", post.slug);
        Some(Self {
            posts,
            post,
            comments: Vec::new(),
            draft: CommentDraft::default(),
            date_format: date_format.to_string(),
        })
    }

    pub fn post(&self) -> &'a Post {
        self.post
    }

    pub fn segments(&self) -> Vec<Segment> {
        render(&self.post.content)
    }

    /// Comments submitted during this view, newest first
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn related(&self, limit: usize) -> Vec<&'a Post> {
        related_posts(self.posts, self.post, limit)
    }

    /// Submit the current draft
    ///
    /// Name and body must be non-blank. On success the comment goes to the
    /// top of the list and the whole draft is cleared; on failure the draft
    /// is left untouched.
    pub fn submit_comment(&mut self) -> Result<&Comment, FormError> {
        required("name", &self.draft.name)?;
        required("comment", &self.draft.body)?;

        let mut date = String::new();
        write!(date, "{}", Local::now().format(&self.date_format))
            .map_err(|_| FormError::DateFormat(self.date_format.clone()))?;

        let draft = std::mem::take(&mut self.draft);
        self.comments.insert(0, Comment::new(draft.name, draft.body, date));

        tracing::info!("Comment added to {}", self.post.slug);
        Ok(&self.comments[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::ContentLoader;

    const DATE_FORMAT: &str = "%-m/%-d/%Y";

    fn posts() -> Vec<Post> {
        ContentLoader::embedded().load().unwrap()
    }

    #[test]
    fn test_open_unknown_slug() {
        let posts = posts();
        assert!(PostView::open(&posts, "no-such-post", DATE_FORMAT).is_none());
    }

    #[test]
    fn test_open_renders_segments() {
        let posts = posts();
        let view = PostView::open(&posts, "mastering-golang-backend-perspective", DATE_FORMAT).unwrap();
        let segments = view.segments();
        assert!(matches!(segments[0], Segment::Heading(crate::content::HeadingLevel::H1, _)));
        assert!(segments.contains(&Segment::FenceOpen));
        assert!(segments.contains(&Segment::CodeLine("    ch := make(chan string)".to_string())));
        assert!(view.comments().is_empty());
    }

    #[test]
    fn test_submit_comment_prepends_and_clears() {
        let posts = posts();
        let mut view = PostView::open(&posts, "django-on-iis-wfastcgi-issues", DATE_FORMAT).unwrap();

        view.draft = CommentDraft {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            body: "First!".into(),
        };
        view.submit_comment().unwrap();

        view.draft.name = "Ravi".into();
        view.draft.body = "Second".into();
        let comment = view.submit_comment().unwrap();
        assert_eq!(comment.name, "Ravi");

        let names: Vec<_> = view.comments().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ravi", "Asha"]);
        assert_eq!(view.draft, CommentDraft::default());
        assert_eq!(view.comments()[1].content, "First!");
        assert!(!view.comments()[0].date.is_empty());
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        let posts = posts();
        let mut view = PostView::open(&posts, "django-on-iis-wfastcgi-issues", DATE_FORMAT).unwrap();

        view.draft.name = "   ".into();
        view.draft.body = "hello".into();
        assert_eq!(view.submit_comment().unwrap_err(), FormError::Required("name"));

        view.draft.name = "Asha".into();
        view.draft.body = "\n\t".into();
        assert_eq!(view.submit_comment().unwrap_err(), FormError::Required("comment"));

        assert!(view.comments().is_empty());
        assert_eq!(view.draft.name, "Asha");
    }

    #[test]
    fn test_bad_date_format_keeps_draft() {
        let posts = posts();
        let mut view = PostView::open(&posts, "django-on-iis-wfastcgi-issues", "%Q").unwrap();
        view.draft.name = "Asha".into();
        view.draft.body = "hello".into();

        assert_eq!(
            view.submit_comment().unwrap_err(),
            FormError::DateFormat("%Q".to_string())
        );
        assert!(view.comments().is_empty());
        assert_eq!(view.draft.body, "hello");
    }

    #[test]
    fn test_related_excludes_current() {
        let posts = posts();
        let view = PostView::open(&posts, "advanced-javascript-learning-journey", DATE_FORMAT).unwrap();
        let related = view.related(2);
        assert_eq!(related.len(), 2);
        assert!(related.iter().all(|p| p.id != view.post().id));
    }
}
