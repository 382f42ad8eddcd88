//! Plain text body conversion
//!
//! One paragraph element per non-empty line. Lines are trimmed and
//! entity-escaped; blank lines only separate, they produce no output.

use super::escape_html;

pub(crate) fn convert(text: &str) -> String {
    let paragraphs: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("<p>{}</p>", escape_html(line)))
        .collect();
    paragraphs.join("\n")
}
