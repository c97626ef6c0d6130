//! Line-oriented content rendering
//!
//! Post bodies are classified one line at a time into [`Segment`]s. The only
//! state carried between lines is whether we are inside a fenced code block.
//! There is no paragraph joining, no nesting and no inline markup.
//!
//! Lines are split with [`str::lines`], so empty content yields no segments
//! and a trailing newline adds no blank segment. The `\r` of a CRLF line
//! ending is dropped as well; CRLF content renders the same as LF content.

use serde::Serialize;

/// Marker that opens and closes a fenced code block
pub const FENCE: &str = "```";

/// One classified unit of renderable content, derived from one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Segment {
    Heading(HeadingLevel, String),
    Paragraph(String),
    ListItem(String),
    CodeLine(String),
    Blank,
    FenceOpen,
    FenceClose,
}

/// Heading depth; only three levels are recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum HeadingLevel {
    H1 = 1,
    H2 = 2,
    H3 = 3,
}

impl HeadingLevel {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl Segment {
    /// Visible text of the segment, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            Segment::Heading(_, text)
            | Segment::Paragraph(text)
            | Segment::ListItem(text)
            | Segment::CodeLine(text) => Some(text),
            Segment::Blank | Segment::FenceOpen | Segment::FenceClose => None,
        }
    }

    /// Whether this is a fence boundary marker
    pub fn is_fence(&self) -> bool {
        matches!(self, Segment::FenceOpen | Segment::FenceClose)
    }
}

/// Render content into display segments, one per input line
pub fn render(content: &str) -> Vec<Segment> {
    let mut in_code_block = false;

    content
        .lines()
        .map(|line| {
            // The language tag after an opening fence is dropped.
            if line.trim_start().starts_with(FENCE) {
                in_code_block = !in_code_block;
                return if in_code_block {
                    Segment::FenceOpen
                } else {
                    Segment::FenceClose
                };
            }

            if in_code_block {
                return Segment::CodeLine(line.to_string());
            }

            classify(line)
        })
        .collect()
}

/// Classify a line outside a code block; first match wins
fn classify(line: &str) -> Segment {
    if let Some(rest) = line.strip_prefix("# ") {
        Segment::Heading(HeadingLevel::H1, rest.to_string())
    } else if let Some(rest) = line.strip_prefix("## ") {
        Segment::Heading(HeadingLevel::H2, rest.to_string())
    } else if let Some(rest) = line.strip_prefix("### ") {
        Segment::Heading(HeadingLevel::H3, rest.to_string())
    } else if line.trim().is_empty() {
        Segment::Blank
    } else if let Some(rest) = line.strip_prefix("- ") {
        Segment::ListItem(rest.to_string())
    } else {
        Segment::Paragraph(line.to_string())
    }
}

/// Plain-text rendering for terminals
pub fn to_text(segments: &[Segment]) -> String {
    let mut out = String::new();

    for segment in segments {
        match segment {
            Segment::Heading(level, text) => {
                let underline = if *level == HeadingLevel::H1 { '=' } else { '-' };
                out.push_str(text);
                out.push('\n');
                if *level != HeadingLevel::H3 {
                    out.extend(std::iter::repeat(underline).take(text.chars().count()));
                    out.push('\n');
                }
            }
            Segment::Paragraph(text) => {
                out.push_str(text);
                out.push('\n');
            }
            Segment::ListItem(text) => {
                out.push_str("  • ");
                out.push_str(text);
                out.push('\n');
            }
            Segment::CodeLine(text) => {
                out.push_str("    ");
                out.push_str(text);
                out.push('\n');
            }
            Segment::Blank => out.push('\n'),
            Segment::FenceOpen | Segment::FenceClose => {}
        }
    }

    out
}
