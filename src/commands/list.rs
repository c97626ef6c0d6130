//! List and filter posts

use anyhow::Result;
use std::io::Write;

use super::OutputFormat;
use crate::content::filter::filter_posts;
use crate::helpers::{html_escape, link_to, truncate};
use crate::session::BlogView;
use crate::Folio;

/// Print the posts matching `search` and `tag`
pub fn run<W: Write>(
    folio: &Folio,
    out: &mut W,
    search: &str,
    tag: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let posts = folio.posts()?;
    let matched = filter_posts(&posts, search, tag);
    tracing::debug!("{} of {} posts match", matched.len(), posts.len());

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &matched)?;
            writeln!(out)?;
        }
        OutputFormat::Html => {
            if matched.is_empty() {
                writeln!(out, "<p class=\"no-results\">No articles found matching your criteria.</p>")?;
                return Ok(());
            }
            writeln!(out, "<ul class=\"posts\">")?;
            for post in matched {
                writeln!(
                    out,
                    "<li>{} <span class=\"date\">{}</span> <span class=\"read-time\">{}</span>",
                    link_to(&folio.config, &post.path(), &post.title),
                    html_escape(&post.date),
                    html_escape(&post.read_time)
                )?;
                writeln!(out, "<p class=\"excerpt\">{}</p></li>", html_escape(&post.excerpt))?;
            }
            writeln!(out, "</ul>")?;
        }
        OutputFormat::Text => {
            if matched.is_empty() {
                writeln!(out, "No articles found matching your criteria.")?;
                return Ok(());
            }
            writeln!(out, "Posts ({}):", matched.len())?;
            for post in matched {
                let featured = if post.featured { " [featured]" } else { "" };
                writeln!(
                    out,
                    "  {} - {}{} ({}) [{}]",
                    post.date, post.title, featured, post.read_time, post.slug
                )?;
                writeln!(out, "      {}", truncate(&post.excerpt, 100, None))?;
                writeln!(out, "      tags: {}", post.tags.join(", "))?;
            }
        }
    }

    Ok(())
}

/// Print the tag set with counts, plus the listing stats
pub fn tags<W: Write>(folio: &Folio, out: &mut W) -> Result<()> {
    let posts = folio.posts()?;
    let counts = crate::content::filter::tag_counts(&posts);

    writeln!(out, "Tags ({}):", counts.len())?;
    for (tag, count) in &counts {
        writeln!(out, "  {} ({})", tag, count)?;
    }

    let stats = BlogView::new(&posts).stats(folio.config.years_experience);
    writeln!(out)?;
    writeln!(out, "Articles Published: {}", stats.articles)?;
    writeln!(out, "Topics Covered: {}", stats.topics)?;
    writeln!(out, "Years Experience: {}", stats.years_experience)?;

    Ok(())
}
