//! Content loader - builds the post dataset from embedded files or a directory

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, Post};

/// Posts compiled into the binary, in display order
const EMBEDDED_POSTS: &[(&str, &str)] = &[
    (
        "advanced-javascript-learning-journey.md",
        include_str!("../../data/posts/advanced-javascript-learning-journey.md"),
    ),
    (
        "django-on-iis-wfastcgi-issues.md",
        include_str!("../../data/posts/django-on-iis-wfastcgi-issues.md"),
    ),
    (
        "mastering-golang-backend-perspective.md",
        include_str!("../../data/posts/mastering-golang-backend-perspective.md"),
    ),
    (
        "building-scalable-web-applications.md",
        include_str!("../../data/posts/building-scalable-web-applications.md"),
    ),
];

/// Average reading speed used when a post has no explicit read time
const WORDS_PER_MINUTE: usize = 200;

enum Source {
    Embedded,
    Dir(PathBuf),
}

/// Loads and validates the post dataset
pub struct ContentLoader {
    source: Source,
}

impl ContentLoader {
    /// Loader for the posts compiled into the binary
    pub fn embedded() -> Self {
        Self {
            source: Source::Embedded,
        }
    }

    /// Loader for markdown posts under `dir`, ordered by file name
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            source: Source::Dir(dir.as_ref().to_path_buf()),
        }
    }

    /// Load every post and check id/slug uniqueness
    pub fn load(&self) -> Result<Vec<Post>, ContentError> {
        let posts = match &self.source {
            Source::Embedded => EMBEDDED_POSTS
                .iter()
                .map(|(name, raw)| parse_post(name, raw).map(|post| (name.to_string(), post)))
                .collect::<Result<Vec<_>, _>>()?,
            Source::Dir(dir) => load_dir(dir)?,
        };

        validate_unique(&posts)?;

        Ok(posts.into_iter().map(|(_, post)| post).collect())
    }
}

/// Load posts from a directory; files that fail to parse are skipped
fn load_dir(dir: &Path) -> Result<Vec<(String, Post)>, ContentError> {
    if !dir.exists() {
        tracing::warn!("Posts directory {:?} does not exist", dir);
        return Ok(Vec::new());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| path.is_file() && is_markdown_file(path))
        .collect();
    files.sort();

    let mut posts = Vec::new();
    for path in files {
        let name = path
            .strip_prefix(dir)
            .unwrap_or(&path)
            .to_string_lossy()
            .to_string();
        let raw = fs::read_to_string(&path).map_err(|error| ContentError::Io {
            source_name: name.clone(),
            error,
        })?;
        match parse_post(&name, &raw) {
            Ok(post) => {
                tracing::debug!("Loaded post {} from {:?}", post.slug, path);
                posts.push((name, post));
            }
            Err(e) => {
                tracing::warn!("Failed to load post {:?}: {}", path, e);
            }
        }
    }

    Ok(posts)
}

/// Build a post from a markdown file with front-matter
fn parse_post(name: &str, raw: &str) -> Result<Post, ContentError> {
    let (fm, body) = FrontMatter::parse(raw).map_err(|error| ContentError::FrontMatter {
        source_name: name.to_string(),
        error,
    })?;

    let missing = |field| ContentError::MissingField {
        source_name: name.to_string(),
        field,
    };

    let id = fm.id.ok_or_else(|| missing("id"))?;
    let title = fm.title.ok_or_else(|| missing("title"))?;
    let date = fm.date.ok_or_else(|| missing("date"))?;

    // Slug defaults to the file name, like permalinks do
    let slug = fm.slug.unwrap_or_else(|| file_stem(name));
    let expected = slug::slugify(&slug);
    if slug != expected {
        return Err(ContentError::InvalidSlug {
            source_name: name.to_string(),
            slug,
            expected,
        });
    }

    let content = body.trim_end().to_string();
    let read_time = fm.read_time.unwrap_or_else(|| estimate_read_time(&content));

    Ok(Post {
        id,
        title,
        slug,
        excerpt: fm.excerpt.unwrap_or_default(),
        content,
        date,
        tags: fm.tags,
        read_time,
        featured: fm.featured,
    })
}

fn validate_unique(posts: &[(String, Post)]) -> Result<(), ContentError> {
    let mut ids: HashMap<&str, &str> = HashMap::new();
    let mut slugs: HashMap<&str, &str> = HashMap::new();

    for (name, post) in posts {
        if let Some(first) = ids.insert(&post.id, name) {
            return Err(ContentError::DuplicateId {
                id: post.id.clone(),
                first: first.to_string(),
                second: name.clone(),
            });
        }
        if let Some(first) = slugs.insert(&post.slug, name) {
            return Err(ContentError::DuplicateSlug {
                slug: post.slug.clone(),
                first: first.to_string(),
                second: name.clone(),
            });
        }
    }

    Ok(())
}

/// "N min read", rounded up, at least one minute
pub fn estimate_read_time(content: &str) -> String {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}

fn file_stem(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string()
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_embedded_posts_load() {
        let posts = ContentLoader::embedded().load().unwrap();
        assert_eq!(posts.len(), 4);
        assert_eq!(posts[0].slug, "advanced-javascript-learning-journey");
        assert_eq!(posts[0].read_time, "5 min read");
        assert!(posts[0].featured);
        assert!(!posts[1].featured);
        assert!(posts.iter().all(|p| !p.tags.is_empty()));
        assert!(posts.iter().all(|p| !p.excerpt.is_empty()));
    }

    #[test]
    fn test_load_from_dir_sorted_by_name() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "b.md", "---\nid: 2\ntitle: Second\ndate: 2025-01-02\n---\nbody two");
        write(tmp.path(), "a.md", "---\nid: 1\ntitle: First\ndate: 2025-01-01\nslug: first-post\n---\nbody one");
        write(tmp.path(), "notes.txt", "ignored");

        let posts = ContentLoader::from_dir(tmp.path()).load().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "first-post");
        assert_eq!(posts[1].slug, "b");
        assert_eq!(posts[1].content, "body two");
        assert_eq!(posts[1].read_time, "1 min read");
    }

    #[test]
    fn test_broken_file_is_skipped() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "good.md", "---\nid: 1\ntitle: Good\ndate: 2025-01-01\n---\n");
        write(tmp.path(), "no-title.md", "---\nid: 2\ndate: 2025-01-01\n---\n");

        let posts = ContentLoader::from_dir(tmp.path()).load().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Good");
    }

    #[test]
    fn test_duplicate_slug_is_rejected() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "a.md", "---\nid: 1\ntitle: A\ndate: x\nslug: same\n---\n");
        write(tmp.path(), "b.md", "---\nid: 2\ntitle: B\ndate: x\nslug: same\n---\n");

        let err = ContentLoader::from_dir(tmp.path()).load().unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSlug { .. }));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "a.md", "---\nid: 7\ntitle: A\ndate: x\n---\n");
        write(tmp.path(), "b.md", "---\nid: 7\ntitle: B\ndate: x\n---\n");

        let err = ContentLoader::from_dir(tmp.path()).load().unwrap_err();
        assert!(matches!(err, ContentError::DuplicateId { ref id, .. } if id == "7"));
    }

    #[test]
    fn test_parse_post_rejects_unsafe_slug() {
        let err = parse_post("x.md", "---\nid: 1\ntitle: T\ndate: d\nslug: Not Safe\n---\n").unwrap_err();
        assert!(matches!(err, ContentError::InvalidSlug { ref expected, .. } if expected == "not-safe"));
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let posts = ContentLoader::from_dir("/nonexistent/folio/posts").load().unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_estimate_read_time() {
        assert_eq!(estimate_read_time(""), "1 min read");
        assert_eq!(estimate_read_time(&"word ".repeat(401)), "3 min read");
    }
}
