//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/blog/") // -> "/folio/blog/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Encode a query parameter value
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Places a post can be shared to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Twitter,
    LinkedIn,
    GitHub,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 3] = [Self::Twitter, Self::LinkedIn, Self::GitHub];

    pub fn label(self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::LinkedIn => "LinkedIn",
            Self::GitHub => "GitHub",
        }
    }
}

/// Share link for a page titled `title` at `page_url`
///
/// GitHub has no share endpoint, so it links to the configured profile;
/// `None` when no GitHub profile is configured.
pub fn share_url(
    config: &SiteConfig,
    platform: SharePlatform,
    title: &str,
    page_url: &str,
) -> Option<String> {
    match platform {
        SharePlatform::Twitter => Some(format!(
            "https://twitter.com/intent/tweet?text={}&url={}",
            encode_component(title),
            encode_component(page_url)
        )),
        SharePlatform::LinkedIn => Some(format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={}",
            encode_component(page_url)
        )),
        SharePlatform::GitHub => config.social_link("GitHub").map(|link| link.url.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.url = "https://example.com".to_string();
        config.root = "/folio/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/blog/"), "/folio/blog/");
        assert_eq!(url_for(&config, ""), "/folio/");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "blog/a-post/"),
            "https://example.com/folio/blog/a-post/"
        );
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(
            encode_component("Mastering Golang: A Backend Developer's Perspective"),
            "Mastering%20Golang%3A%20A%20Backend%20Developer's%20Perspective"
        );
        assert_eq!(
            encode_component("https://example.com/blog/x/"),
            "https%3A%2F%2Fexample.com%2Fblog%2Fx%2F"
        );
    }

    #[test]
    fn test_share_urls() {
        let config = test_config();
        let url = "https://example.com/folio/blog/x/";

        let twitter = share_url(&config, SharePlatform::Twitter, "Hi & bye", url).unwrap();
        assert_eq!(
            twitter,
            "https://twitter.com/intent/tweet?text=Hi%20%26%20bye&url=https%3A%2F%2Fexample.com%2Ffolio%2Fblog%2Fx%2F"
        );

        let linkedin = share_url(&config, SharePlatform::LinkedIn, "Hi", url).unwrap();
        assert!(linkedin.starts_with("https://www.linkedin.com/sharing/share-offsite/?url=https%3A"));

        let github = share_url(&config, SharePlatform::GitHub, "Hi", url).unwrap();
        assert_eq!(github, "https://github.com/santhoshd");

        let mut bare = test_config();
        bare.social.clear();
        assert!(share_url(&bare, SharePlatform::GitHub, "Hi", url).is_none());
    }
}
