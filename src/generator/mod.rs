//! Generator module - writes the site's static HTML pages

use anyhow::{Context as _, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tera::Context;

use crate::content::filter::{all_tags, filter_posts, tag_counts};
use crate::content::{related_posts, render, Post};
use crate::helpers::{full_url_for, segments_to_html, share_url, url_for, SharePlatform};
use crate::session::BlogView;
use crate::templates::{PostData, ShareLink, TagData, TagPaths, TemplateRenderer};
use crate::Folio;

/// One entry of `search.json`
#[derive(Debug, Serialize)]
struct SearchEntry<'a> {
    id: &'a str,
    slug: &'a str,
    title: &'a str,
    excerpt: &'a str,
    tags: &'a [String],
    url: String,
}

/// Static site generator using Tera templates
pub struct Generator {
    folio: Folio,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(folio: &Folio) -> Result<Self> {
        Ok(Self {
            folio: folio.clone(),
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Generate the entire site; returns the number of files written
    pub fn generate(&self, posts: &[Post]) -> Result<usize> {
        fs::create_dir_all(&self.folio.public_dir)?;

        let tag_paths = TagPaths::new(all_tags(posts));

        let mut written = 0;
        written += self.generate_home_page(posts, &tag_paths)?;
        written += self.generate_about_page()?;
        written += self.generate_contact_page()?;
        written += self.generate_blog_index(posts, &tag_paths)?;
        written += self.generate_post_pages(posts, &tag_paths)?;
        written += self.generate_tag_pages(posts, &tag_paths)?;
        written += self.generate_search_index(posts)?;

        Ok(written)
    }

    /// Create a base context with common variables
    fn create_base_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("config", &self.folio.config);
        context.insert("root", &url_for(&self.folio.config, ""));
        context.insert("version", env!("CARGO_PKG_VERSION"));
        context.insert("current_year", &chrono::Local::now().format("%Y").to_string());
        context
    }

    fn generate_home_page(&self, posts: &[Post], tag_paths: &TagPaths) -> Result<usize> {
        let featured: Vec<PostData> = posts
            .iter()
            .filter(|p| p.featured)
            .map(|p| PostData::from_post(&self.folio.config, p, tag_paths))
            .collect();

        let mut context = self.create_base_context();
        context.insert("featured", &featured);
        self.write_page("home.html", &context, "index.html")
    }

    fn generate_about_page(&self) -> Result<usize> {
        let context = self.create_base_context();
        self.write_page("about.html", &context, "about/index.html")
    }

    fn generate_contact_page(&self) -> Result<usize> {
        let context = self.create_base_context();
        self.write_page("contact.html", &context, "contact/index.html")
    }

    /// Listing page: either every post, or the posts carrying `tag`
    fn listing_context(
        &self,
        posts: &[Post],
        tag: Option<&str>,
        tag_paths: &TagPaths,
    ) -> Context {
        let config = &self.folio.config;
        let view = BlogView::new(posts);

        let visible: Vec<PostData> = filter_posts(posts, "", tag)
            .into_iter()
            .map(|p| PostData::from_post(config, p, tag_paths))
            .collect();
        let tags: Vec<TagData> = tag_counts(posts)
            .into_iter()
            .map(|(name, count)| TagData::new(config, name, tag_paths.path(name), count))
            .collect();

        let mut context = self.create_base_context();
        context.insert("posts", &visible);
        context.insert("tags", &tags);
        context.insert("selected_tag", &tag);
        context.insert("stats", &view.stats(config.years_experience));
        context
    }

    fn generate_blog_index(&self, posts: &[Post], tag_paths: &TagPaths) -> Result<usize> {
        let context = self.listing_context(posts, None, tag_paths);
        self.write_page("blog.html", &context, "blog/index.html")
    }

    fn generate_tag_pages(&self, posts: &[Post], tag_paths: &TagPaths) -> Result<usize> {
        let mut written = 0;
        for (tag, path) in tag_paths.iter() {
            let context = self.listing_context(posts, Some(tag), tag_paths);
            let output = format!("{}index.html", path);
            written += self.write_page("blog.html", &context, &output)?;
        }
        Ok(written)
    }

    fn generate_post_pages(&self, posts: &[Post], tag_paths: &TagPaths) -> Result<usize> {
        let config = &self.folio.config;
        let mut written = 0;

        for post in posts {
            let page_url = full_url_for(config, &post.path());
            let share: Vec<ShareLink> = SharePlatform::ALL
                .into_iter()
                .filter_map(|platform| {
                    share_url(config, platform, &post.title, &page_url).map(|url| ShareLink {
                        label: platform.label().to_string(),
                        url,
                    })
                })
                .collect();
            let related: Vec<PostData> = related_posts(posts, post, config.related_posts)
                .into_iter()
                .map(|p| PostData::from_post(config, p, tag_paths))
                .collect();

            let mut context = self.create_base_context();
            context.insert("post", &PostData::from_post(config, post, tag_paths));
            context.insert("content", &segments_to_html(&render(&post.content)));
            context.insert("share", &share);
            context.insert("related", &related);

            let output = format!("{}index.html", post.path());
            written += self.write_page("post.html", &context, &output)?;
        }

        Ok(written)
    }

    fn generate_search_index(&self, posts: &[Post]) -> Result<usize> {
        let entries: Vec<SearchEntry> = posts
            .iter()
            .map(|p| SearchEntry {
                id: &p.id,
                slug: &p.slug,
                title: &p.title,
                excerpt: &p.excerpt,
                tags: &p.tags,
                url: url_for(&self.folio.config, &p.path()),
            })
            .collect();

        let output_path = self.folio.public_dir.join("search.json");
        fs::write(&output_path, serde_json::to_string_pretty(&entries)?)?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(1)
    }

    fn write_page(&self, template: &str, context: &Context, output: &str) -> Result<usize> {
        let html = self
            .renderer
            .render(template, context)
            .with_context(|| format!("Failed to render {}", output))?;
        let output_path = self.folio.public_dir.join(output);
        write_file(&output_path, &html)?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(1)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
