//! Document assembly: rendered parts → complete HTML page.
//!
//! Assembly concatenates the per-part fragments, wrapping each in a
//! section element that carries its level, then embeds the result in a
//! self-contained HTML5 page with the baseline stylesheet, an optional
//! theme override and optional custom CSS appended last.

use crate::content::{escape_html, RenderOptions};
use crate::part::Part;
use crate::project::Project;

/// CSS theme for assembled pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HtmlTheme {
    /// Baseline sans-serif presentation (relies on baseline.css alone).
    #[default]
    Clean,
    /// Serif typography override for long-form reading.
    Book,
}

impl HtmlTheme {
    /// Resolve a theme from its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "clean" | "default" => Some(Self::Clean),
            "book" => Some(Self::Book),
            _ => None,
        }
    }
}

/// Options for page assembly.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// CSS theme to use.
    pub theme: HtmlTheme,
    /// Optional custom CSS appended after the baseline and theme CSS.
    pub custom_css: Option<String>,
    /// Render options forwarded to the per-part render pass.
    pub render: RenderOptions,
}

impl HtmlOptions {
    pub fn new(theme: HtmlTheme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }
}

/// Concatenate rendered parts into a document body.
///
/// Parts must already carry their `html` output; parts that rendered to
/// nothing produce no wrapper.
pub fn assemble_body<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a Part>,
{
    let mut body = String::new();
    for part in parts {
        if part.html.is_empty() {
            continue;
        }
        body.push_str(&format!(
            "<section class=\"part part-level-{}\">\n{}\n</section>\n",
            part.level, part.html
        ));
    }
    body
}

/// Prepare a snapshot of the project and assemble it into a full page.
pub fn assemble_page(project: &Project, options: &HtmlOptions) -> String {
    let mut prepared = project.clone();
    prepared.prepare_with(&options.render);

    let title = if prepared.title.is_empty() {
        "Untitled"
    } else {
        prepared.title.as_str()
    };
    let body = assemble_body(prepared.included_parts());
    wrap_in_document(&body, title, options)
}

/// Wrap the content in a complete HTML document with embedded CSS
pub fn wrap_in_document(body_html: &str, title: &str, options: &HtmlOptions) -> String {
    let baseline_css = include_str!("../css/baseline.css");
    let theme_css = match options.theme {
        HtmlTheme::Clean => include_str!("../css/themes/theme-clean.css"),
        HtmlTheme::Book => include_str!("../css/themes/theme-book.css"),
    };
    let custom_css = options.custom_css.as_deref().unwrap_or("");
    let escaped_title = escape_html(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="scrivo-render">
  <title>{escaped_title}</title>
  <style>
{baseline_css}
{theme_css}
{custom_css}
  </style>
</head>
<body>
<div class="scrivo-document">
{body_html}
</div>
</body>
</html>"#
    )
}
