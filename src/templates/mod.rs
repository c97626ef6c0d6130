//! Built-in site templates using the Tera template engine
//!
//! Every template is embedded in the binary; there is no theme directory.

use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::url_for;

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("home.html", include_str!("site/home.html")),
            ("about.html", include_str!("site/about.html")),
            ("contact.html", include_str!("site/contact.html")),
            ("blog.html", include_str!("site/blog.html")),
            ("post.html", include_str!("site/post.html")),
            // Partials
            (
                "partials/header.html",
                include_str!("site/partials/header.html"),
            ),
            (
                "partials/footer.html",
                include_str!("site/partials/footer.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub id: String,
    pub title: String,
    pub url: String,
    pub excerpt: String,
    pub date: String,
    pub read_time: String,
    pub featured: bool,
    pub tags: Vec<TagData>,
}

impl PostData {
    pub fn from_post(config: &SiteConfig, post: &Post, tag_paths: &TagPaths) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            url: url_for(config, &post.path()),
            excerpt: post.excerpt.clone(),
            date: post.date.clone(),
            read_time: post.read_time.clone(),
            featured: post.featured,
            tags: post
                .tags
                .iter()
                .map(|tag| TagData::new(config, tag, tag_paths.path(tag), 0))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagData {
    pub name: String,
    pub url: String,
    pub count: usize,
}

impl TagData {
    pub fn new(config: &SiteConfig, name: &str, path: &str, count: usize) -> Self {
        Self {
            name: name.to_string(),
            url: url_for(config, path),
            count,
        }
    }
}

/// Listing page path (without root) for every tag
///
/// Tags match case-sensitively, so `Backend` and `backend` are two tags with
/// the same slug. Later tags get a numeric suffix; a tag with no slug
/// characters at all is filed under `tag`.
#[derive(Debug, Clone, Default)]
pub struct TagPaths {
    paths: IndexMap<String, String>,
}

impl TagPaths {
    /// Assign paths in iteration order; repeated tags keep their first path
    pub fn new<'a>(tags: impl IntoIterator<Item = &'a str>) -> Self {
        let mut paths = IndexMap::new();
        let mut taken = HashSet::new();

        for tag in tags {
            if paths.contains_key(tag) {
                continue;
            }
            let base = match slug::slugify(tag) {
                slug if slug.is_empty() => "tag".to_string(),
                slug => slug,
            };
            let mut slug = base.clone();
            let mut n = 2;
            while !taken.insert(slug.clone()) {
                slug = format!("{}-{}", base, n);
                n += 1;
            }
            paths.insert(tag.to_string(), format!("blog/tags/{}/", slug));
        }

        Self { paths }
    }

    /// Path of `tag`'s page; unknown tags point at the full listing
    pub fn path(&self, tag: &str) -> &str {
        self.paths.get(tag).map_or("blog/", String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.paths.iter().map(|(tag, path)| (tag.as_str(), path.as_str()))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareLink {
    pub label: String,
    pub url: String,
}
