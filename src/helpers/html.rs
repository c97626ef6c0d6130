//! HTML helper functions

use super::url::url_for;
use crate::config::SiteConfig;
use crate::content::Segment;

/// Generate an anchor tag
///
/// # Examples
/// ```ignore
/// link_to(&config, "/about/", "About") // -> <a href="/about/">About</a>
/// ```
pub fn link_to(config: &SiteConfig, path: &str, text: &str) -> String {
    let external = path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with("mailto:");

    if external {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            html_escape(path),
            html_escape(text)
        )
    } else {
        format!(
            r#"<a href="{}">{}</a>"#,
            url_for(config, path),
            html_escape(text)
        )
    }
}

/// Turn rendered segments into an HTML fragment
///
/// Consecutive list items share one `<ul>`; a fence left open at the end of
/// the content is closed.
pub fn segments_to_html(segments: &[Segment]) -> String {
    let mut html = String::new();
    let mut in_list = false;
    let mut in_code = false;

    for segment in segments {
        let is_item = matches!(segment, Segment::ListItem(_));
        if in_list && !is_item {
            html.push_str("</ul>\n");
            in_list = false;
        }

        match segment {
            Segment::Heading(level, text) => {
                let n = level.as_u8();
                html.push_str(&format!("<h{n}>{}</h{n}>\n", html_escape(text)));
            }
            Segment::Paragraph(text) => {
                html.push_str(&format!("<p>{}</p>\n", html_escape(text)));
            }
            Segment::ListItem(text) => {
                if !in_list {
                    html.push_str("<ul>\n");
                    in_list = true;
                }
                html.push_str(&format!("<li>{}</li>\n", html_escape(text)));
            }
            Segment::CodeLine(text) => {
                html.push_str(&html_escape(text));
                html.push('\n');
            }
            Segment::Blank => html.push_str("<div class=\"spacer\"></div>\n"),
            Segment::FenceOpen => {
                html.push_str("<pre class=\"code-block\"><code>");
                in_code = true;
            }
            Segment::FenceClose => {
                html.push_str("</code></pre>\n");
                in_code = false;
            }
        }
    }

    if in_list {
        html.push_str("</ul>\n");
    }
    if in_code {
        html.push_str("</code></pre>\n");
    }

    html
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Truncate a string to a specified length
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.chars().count()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}
