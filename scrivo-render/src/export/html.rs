//! HTML export: a self-contained page with embedded CSS.

use std::collections::HashMap;
use std::fs;

use crate::assemble::{assemble_page, HtmlOptions, HtmlTheme};
use crate::error::ComposeError;
use crate::export::{ExportOutput, Exporter};
use crate::project::Project;

/// Exporter producing a complete standalone HTML5 page.
#[derive(Default)]
pub struct HtmlExporter {
    options: HtmlOptions,
}

impl HtmlExporter {
    /// Create an HTML exporter with the given assembly options.
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Create an HTML exporter with the given theme.
    pub fn with_theme(theme: HtmlTheme) -> Self {
        Self::new(HtmlOptions::new(theme))
    }
}

impl Exporter for HtmlExporter {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Self-contained HTML5 page with embedded CSS"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn export(
        &self,
        project: &Project,
        options: &HashMap<String, String>,
    ) -> Result<ExportOutput, ComposeError> {
        let mut opts = self.options.clone();

        if let Some(name) = options.get("theme") {
            opts.theme = HtmlTheme::from_name(name).ok_or_else(|| {
                ComposeError::NotSupported(format!("Unknown HTML theme '{name}'"))
            })?;
        }
        if let Some(path) = options.get("css-path") {
            let css = fs::read_to_string(path)
                .map_err(|e| ComposeError::ExportError(format!("{path}: {e}")))?;
            opts.custom_css = Some(css);
        }
        if let Some(raw) = options.get("numbered-headings") {
            opts.render.numbered_headings = parse_bool_option("numbered-headings", raw)?;
        }

        Ok(ExportOutput::Text(assemble_page(project, &opts)))
    }
}

pub(crate) fn parse_bool_option(key: &str, raw: &str) -> Result<bool, ComposeError> {
    if raw.is_empty() {
        return Ok(true);
    }
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(ComposeError::NotSupported(format!(
            "Invalid boolean value '{other}' for --extra-{key}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::Part;

    fn sample_project() -> Project {
        let mut project = Project::new("Sample");
        project.parts = vec![
            Part::new(0, "One", "First body."),
            Part::new(1, "Two", "Second body."),
        ];
        project
    }

    #[test]
    fn exports_a_full_page() {
        let exporter = HtmlExporter::default();
        let output = exporter
            .export(&sample_project(), &HashMap::new())
            .unwrap();
        let ExportOutput::Text(html) = output else {
            panic!("expected text output");
        };
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<h1>1 One</h1>"));
        assert!(html.contains("<h1>1.1 Two</h1>"));
    }

    #[test]
    fn theme_option_selects_the_theme() {
        let exporter = HtmlExporter::default();
        let mut options = HashMap::new();
        options.insert("theme".to_string(), "book".to_string());
        let html = match exporter.export(&sample_project(), &options).unwrap() {
            ExportOutput::Text(html) => html,
            ExportOutput::Binary(_) => panic!("expected text output"),
        };
        assert!(html.contains("Georgia"));
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let exporter = HtmlExporter::default();
        let mut options = HashMap::new();
        options.insert("theme".to_string(), "neon".to_string());
        let result = exporter.export(&sample_project(), &options);
        assert!(matches!(result, Err(ComposeError::NotSupported(_))));
    }

    #[test]
    fn numbered_headings_can_be_disabled() {
        let exporter = HtmlExporter::default();
        let mut options = HashMap::new();
        options.insert("numbered-headings".to_string(), "false".to_string());
        let html = match exporter.export(&sample_project(), &options).unwrap() {
            ExportOutput::Text(html) => html,
            ExportOutput::Binary(_) => panic!("expected text output"),
        };
        assert!(html.contains("<h1>One</h1>"));
        assert!(!html.contains("<h1>1 One</h1>"));
    }

    #[test]
    fn bool_options_accept_the_usual_spellings() {
        assert!(parse_bool_option("k", "").unwrap());
        assert!(parse_bool_option("k", "Yes").unwrap());
        assert!(!parse_bool_option("k", "0").unwrap());
        assert!(parse_bool_option("k", "maybe").is_err());
    }
}
