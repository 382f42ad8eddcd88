//! Content rendering: source dialect detection and HTML conversion
//!
//! Authors paste whatever they have into a part — an HTML fragment, a
//! chunk of Markdown, or plain prose. The renderer sniffs the dialect per
//! part, converts the body to an HTML fragment with the matching strategy,
//! and prefixes a generated heading built from the part's title and its
//! outline number.
//!
//! Detection is a pure classifier over text patterns, checked in priority
//! order (HTML beats Markdown beats plain). Each classification has its own
//! conversion module:
//!
//! - [`html`]: body unwrapping + heading depth normalization
//! - [`markdown`]: comrak with the table extension set enabled
//! - [`plain`]: line-per-paragraph wrapping with entity escaping
//!
//! Conversion never fails. Malformed markup degrades to garbled output at
//! worst; no part is ever skipped.

mod html;
mod markdown;
mod plain;

pub use html::shift_headings;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::part::Part;

/// Source dialect of a part's raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// An HTML fragment (tag pair or self-closing `<br>`/`<img>`).
    Html,
    /// Markdown (heading marker, emphasis, link or table row present).
    Markdown,
    /// Anything else, including empty text.
    Plain,
}

/// Options for the render pass.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Prefix generated headings with the part's outline number.
    pub numbered_headings: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            numbered_headings: true,
        }
    }
}

static OPEN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<([a-zA-Z][a-zA-Z0-9]*)(\s[^>]*)?>").unwrap());
static SELF_CLOSING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<(br|img)\b[^>]*/?>").unwrap());
static MD_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{1,6} ").unwrap());
static MD_EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*[^*]+\*\*|__[^_]+__|\*[^*]+\*|_[^_]+_").unwrap());
static MD_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[^!])\[[^\]]+\]\([^)]+\)").unwrap());
static MD_TABLE_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*\|.+\|\s*$").unwrap());

/// Classify a part's raw text into its source dialect.
///
/// Empty or whitespace-only text is Plain. HTML wins over Markdown: a
/// fragment containing a matched tag pair is treated as HTML even if it
/// also contains Markdown markers.
pub fn detect(text: &str) -> SourceFormat {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return SourceFormat::Plain;
    }
    if looks_like_html(trimmed) {
        return SourceFormat::Html;
    }
    if MD_HEADING.is_match(trimmed)
        || MD_EMPHASIS.is_match(trimmed)
        || MD_LINK.is_match(trimmed)
        || MD_TABLE_ROW.is_match(trimmed)
    {
        return SourceFormat::Markdown;
    }
    SourceFormat::Plain
}

fn looks_like_html(text: &str) -> bool {
    let lowered = text.to_ascii_lowercase();
    for caps in OPEN_TAG.captures_iter(text) {
        let close = format!("</{}", caps[1].to_ascii_lowercase());
        if lowered.contains(&close) {
            return true;
        }
    }
    SELF_CLOSING.is_match(text)
}

/// Render every part in the sequence with default options, writing `html`.
///
/// Parts must already carry their outline numbers; run
/// [`crate::outline::number`] over the same sequence first.
pub fn render<'a, I>(parts: I)
where
    I: IntoIterator<Item = &'a mut Part>,
{
    render_with(parts, &RenderOptions::default());
}

/// Render every part in the sequence, writing `html`.
pub fn render_with<'a, I>(parts: I, options: &RenderOptions)
where
    I: IntoIterator<Item = &'a mut Part>,
{
    for part in parts {
        part.html = render_part_with(part, options);
    }
}

/// Render a single, already numbered part to its HTML fragment.
pub fn render_part(part: &Part) -> String {
    render_part_with(part, &RenderOptions::default())
}

/// Render a single part: generated heading, converted body, then figures
/// for any attached images. Reads `level`, `name`, `number` and `text`;
/// mutates nothing.
pub fn render_part_with(part: &Part, options: &RenderOptions) -> String {
    let body = match detect(&part.text) {
        SourceFormat::Html => html::convert(&part.text, part.level),
        SourceFormat::Markdown => markdown::convert(&part.text),
        SourceFormat::Plain => plain::convert(&part.text),
    };

    let mut fragment = String::new();
    if !part.name.is_empty() {
        fragment.push_str(&heading_for(part, options));
        fragment.push('\n');
    }
    fragment.push_str(&body);
    for image in &part.images {
        fragment.push('\n');
        fragment.push_str(&figure_for(image, &part.name));
    }
    fragment.trim().to_string()
}

fn heading_for(part: &Part, options: &RenderOptions) -> String {
    let depth = part.level.clamp(1, 5);
    let name = escape_html(&part.name);
    if options.numbered_headings && !part.number.is_empty() {
        format!("<h{depth}>{} {name}</h{depth}>", part.number)
    } else {
        format!("<h{depth}>{name}</h{depth}>")
    }
}

fn figure_for(path: &str, alt: &str) -> String {
    format!(
        "<figure class=\"part-figure\"><img src=\"{}\" alt=\"{}\"></figure>",
        escape_html(path),
        escape_html(alt)
    )
}

/// Escape HTML special characters in text
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
