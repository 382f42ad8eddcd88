//! Markdown body conversion
//!
//! Conversion is delegated to comrak. The extension set matches what part
//! authors actually paste: pipe tables, strikethrough, bare links, task
//! lists and superscript.

use comrak::{markdown_to_html, ComrakOptions};

pub(crate) fn convert(text: &str) -> String {
    markdown_to_html(text, &options())
}

fn options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.superscript = true;
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_and_paragraph() {
        let html = convert("# Title\n\nbody text\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>body text</p>"));
    }

    #[test]
    fn pipe_tables_are_enabled() {
        let html = convert("| a | b |\n| - | - |\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>a</th>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn emphasis_converts() {
        let html = convert("some **bold** and *italic* words\n");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }
}
