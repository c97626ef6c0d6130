//! folio: a personal portfolio and blog
//!
//! This crate holds the blog's post dataset, the search/tag filter and the
//! line-oriented content renderer used by every page, the transient view
//! sessions (listing filters, comments, contact form), and the static page
//! generator that turns all of it into HTML.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod session;
pub mod templates;

use anyhow::Result;
use std::path::Path;

use content::loader::ContentLoader;
use content::Post;

/// The main application handle
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Folio {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            public_dir,
        })
    }

    /// Load the post dataset (embedded, or from `posts_dir` when configured)
    pub fn posts(&self) -> Result<Vec<Post>> {
        let loader = match &self.config.posts_dir {
            Some(dir) => ContentLoader::from_dir(self.base_dir.join(dir)),
            None => ContentLoader::embedded(),
        };
        let posts = loader.load()?;
        tracing::debug!("Loaded {} posts", posts.len());
        Ok(posts)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
