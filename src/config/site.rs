//! Site configuration (_config.yml)

use anyhow::{bail, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub public_dir: String,
    /// Load posts from this directory instead of the built-in set
    pub posts_dir: Option<String>,

    // Writing
    /// chrono format used when stamping new comments
    pub date_format: String,
    /// Number of "More Articles" shown under a post
    pub related_posts: usize,

    // Profile
    pub years_experience: u32,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub about: AboutConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Santhosh D".to_string(),
            subtitle: "Developer & Lifelong Learner".to_string(),
            description: "Sharing my journey, insights, and learnings in software development, career growth, and technology.".to_string(),
            author: "Santhosh D".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            public_dir: "public".to_string(),
            posts_dir: None,

            date_format: "%-m/%-d/%Y".to_string(),
            related_posts: 2,

            years_experience: 5,
            contact: ContactConfig::default(),
            social: default_social(),
            about: AboutConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Reject values that would only fail later, mid-session
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            bail!("Invalid date_format `{}` in _config.yml", self.date_format);
        }
        Ok(())
    }

    /// Look up a social link by label (case-insensitive)
    pub fn social_link(&self, label: &str) -> Option<&SocialLink> {
        self.social
            .iter()
            .find(|link| link.label.eq_ignore_ascii_case(label))
    }
}

/// Direct contact details shown on the contact page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub location: String,
    pub response_time: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "santhosh@example.com".to_string(),
            location: "India".to_string(),
            response_time: "Within 24 hours".to_string(),
            topics: vec![
                "Full-stack development projects".to_string(),
                "Technical consulting opportunities".to_string(),
                "Open source collaborations".to_string(),
                "Mentoring and knowledge sharing".to_string(),
            ],
        }
    }
}

/// A social profile link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub handle: String,
}

fn default_social() -> Vec<SocialLink> {
    [
        ("GitHub", "https://github.com/santhoshd", "@santhoshd"),
        ("LinkedIn", "https://linkedin.com/in/santhoshd", "/in/santhoshd"),
        ("Twitter", "https://twitter.com/santhoshd", "@santhoshd"),
        ("Email", "mailto:santhosh@example.com", "santhosh@example.com"),
    ]
    .into_iter()
    .map(|(label, url, handle)| SocialLink {
        label: label.to_string(),
        url: url.to_string(),
        handle: handle.to_string(),
    })
    .collect()
}

/// About page content
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    pub headline: String,
    #[serde(default)]
    pub journey: Vec<String>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            headline: "A passionate front-end developer on a journey of continuous learning and growth.".to_string(),
            journey: vec![
                "2016 – Graduated in Computer Science and Engineering.".to_string(),
                "2019 – Joined an enterprise engineering team building internal applications.".to_string(),
            ],
            skills: vec![
                SkillGroup::new("Frontend", &["React", "Angular", "TypeScript", "Tailwind CSS"]),
                SkillGroup::new("Backend", &["Node.js", "Django", "Python"]),
                SkillGroup::new("Database", &["PostgreSQL", "MongoDB", "Redis"]),
            ],
        }
    }
}

/// A named group of skills
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl SkillGroup {
    fn new(category: &str, items: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.public_dir, "public");
        assert_eq!(config.related_posts, 2);
        assert!(config.posts_dir.is_none());
        assert_eq!(config.social.len(), 4);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Folio
author: Test User
posts_dir: posts
related_posts: 3
social:
  - label: GitHub
    url: https://github.com/test
contact:
  email: me@test.dev
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Folio");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.posts_dir.as_deref(), Some("posts"));
        assert_eq!(config.related_posts, 3);
        assert_eq!(config.social.len(), 1);
        assert_eq!(config.contact.email, "me@test.dev");
        assert_eq!(config.contact.location, "India");
    }

    #[test]
    fn test_invalid_date_format_is_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("_config.yml");

        fs::write(&path, "date_format: \"%Q\"\n").unwrap();
        let err = SiteConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("`%Q`"));

        fs::write(&path, "date_format: \"%Y-%m-%d\"\n").unwrap();
        assert_eq!(SiteConfig::load(&path).unwrap().date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_social_link_lookup() {
        let config = SiteConfig::default();
        let github = config.social_link("github").unwrap();
        assert_eq!(github.url, "https://github.com/santhoshd");
        assert!(config.social_link("mastodon").is_none());
    }
}
