//! Raw HTML body handling
//!
//! Pasted fragments arrive with arbitrary heading ranges: one author's
//! clipboard starts at `<h1>`, another's at `<h3>`. The shift below
//! renumbers every heading tag so the shallowest one lands just under the
//! part's own level, keeping the assembled document outline consistent.
//!
//! The rewrite is text-pattern based on purpose. Open and close tags are
//! matched independently and no balance validation happens; an unbalanced
//! fragment shifts as-is instead of being repaired or rejected.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BODY_CONTENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<body[^>]*>(.*)</body>").unwrap());
static HEADING_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<(/?)h([1-9])([\s>/])").unwrap());

pub(crate) fn convert(text: &str, level: usize) -> String {
    shift_headings(extract_body(text), level)
}

/// If the fragment is a full page, keep only what is inside `<body>`.
fn extract_body(text: &str) -> &str {
    BODY_CONTENT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|inner| inner.as_str())
        .unwrap_or(text)
}

/// Renumber embedded `<h1>`..`<h9>` tags so the shallowest heading in the
/// fragment sits at `level + 1`. Every heading numeral moves by the same
/// delta, clamped into the 1..=9 range. Fragments without heading tags are
/// returned unchanged.
pub fn shift_headings(fragment: &str, level: usize) -> String {
    let min_depth = HEADING_TAG
        .captures_iter(fragment)
        .filter_map(|caps| caps[2].parse::<i32>().ok())
        .min();
    let Some(min_depth) = min_depth else {
        return fragment.to_string();
    };

    let delta = level as i32 - min_depth + 1;
    HEADING_TAG
        .replace_all(fragment, |caps: &Captures<'_>| {
            let depth: i32 = caps[2].parse().unwrap_or(min_depth);
            let shifted = (depth + delta).clamp(1, 9);
            format!("<{}h{}{}", &caps[1], shifted, &caps[3])
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_headings_relative_to_the_part_level() {
        let html = shift_headings("<h1>A</h1><h2>B</h2>", 3);
        assert_eq!(html, "<h4>A</h4><h5>B</h5>");
    }

    #[test]
    fn fragment_without_headings_is_unchanged() {
        assert_eq!(shift_headings("<p>hi</p>", 3), "<p>hi</p>");
    }

    #[test]
    fn shift_clamps_at_the_deep_end() {
        let html = shift_headings("<h8>A</h8><h9>B</h9>", 2);
        assert_eq!(html, "<h9>A</h9><h9>B</h9>");
    }

    #[test]
    fn shift_can_move_headings_shallower() {
        let html = shift_headings("<h3>A</h3><h4>B</h4>", 0);
        assert_eq!(html, "<h1>A</h1><h2>B</h2>");
    }

    #[test]
    fn unbalanced_tags_shift_independently() {
        let html = shift_headings("<h2>open only <h3>also open", 2);
        assert_eq!(html, "<h3>open only <h4>also open");

        let html = shift_headings("stray close</h2> here", 0);
        assert_eq!(html, "stray close</h1> here");
    }

    #[test]
    fn attributes_survive_and_tag_case_normalizes() {
        let html = shift_headings("<H1 class=\"x\">A</H1>", 1);
        assert_eq!(html, "<h2 class=\"x\">A</h2>");
    }

    #[test]
    fn body_wrapper_is_unwrapped() {
        let html = convert("<html><body class=\"a\"><p>inner</p></body></html>", 0);
        assert_eq!(html, "<p>inner</p>");
    }

    #[test]
    fn fragment_without_body_wrapper_is_used_as_is() {
        assert_eq!(convert("<p>x</p>", 0), "<p>x</p>");
    }
}
