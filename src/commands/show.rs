//! Show a single post

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use super::OutputFormat;
use crate::content::markdown::to_text;
use crate::content::{Post, Segment};
use crate::helpers::segments_to_html;
use crate::session::PostView;
use crate::Folio;

#[derive(Serialize)]
struct ShowJson<'a> {
    post: &'a Post,
    segments: Vec<Segment>,
    related: Vec<&'a str>,
}

/// Print the post with `slug`, rendered in `format`
pub fn run<W: Write>(folio: &Folio, out: &mut W, slug: &str, format: OutputFormat) -> Result<()> {
    let posts = folio.posts()?;
    let Some(view) = PostView::open(&posts, slug, &folio.config.date_format) else {
        anyhow::bail!(
            "No post with slug `{}`. Run `folio list` to see all posts.",
            slug
        );
    };

    let post = view.post();
    let segments = view.segments();
    let related = view.related(folio.config.related_posts);

    match format {
        OutputFormat::Json => {
            let json = ShowJson {
                post,
                segments,
                related: related.iter().map(|p| p.slug.as_str()).collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &json)?;
            writeln!(out)?;
        }
        OutputFormat::Html => {
            write!(out, "{}", segments_to_html(&segments))?;
        }
        OutputFormat::Text => {
            writeln!(out, "{}", post.title)?;
            let featured = if post.featured { " · Featured" } else { "" };
            writeln!(out, "{} · {}{}", post.date, post.read_time, featured)?;
            writeln!(out, "Tags: {}", post.tags.join(", "))?;
            writeln!(out)?;
            write!(out, "{}", to_text(&segments))?;
            if !related.is_empty() {
                writeln!(out)?;
                writeln!(out, "More Articles:")?;
                for other in related {
                    writeln!(out, "  {} [{}]", other.title, other.slug)?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn show(slug: &str, format: OutputFormat) -> Result<String> {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        let mut buf = Vec::new();
        run(&folio, &mut buf, slug, format)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_show_text() {
        let text = show("django-on-iis-wfastcgi-issues", OutputFormat::Text).unwrap();
        assert!(text.starts_with("Hosting Django Application in IIS: Challenges and Fixes\n2024-02-10 · 6 min read\n"));
        assert!(text.contains("    icacls"));
        assert!(text.contains("More Articles:\n  Mastering Advanced JavaScript Concepts"));
    }

    #[test]
    fn test_show_html() {
        let html = show("mastering-golang-backend-perspective", OutputFormat::Html).unwrap();
        assert!(html.starts_with("<h1>Mastering Golang: A Backend Developer&#39;s Perspective</h1>"));
    }

    #[test]
    fn test_show_json_segments() {
        let text = show("advanced-javascript-learning-journey", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["post"]["id"], "1");
        assert_eq!(value["segments"][0]["kind"], "heading");
        assert_eq!(value["related"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_show_unknown_slug() {
        let err = show("nope", OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("folio list"));
    }
}
