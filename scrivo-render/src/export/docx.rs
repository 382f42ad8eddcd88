//! DOCX export built on top of page assembly + an external pandoc binary.
//!
//! The implementation renders the project to a standalone HTML page using
//! the same assembly path as the HTML exporter, writes it to a temp dir,
//! then shells out to pandoc to produce the .docx and reads the result
//! back. The converter itself is a contract boundary: scrivo hands it an
//! input file and expects a file at the given output path.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use tempfile::tempdir;
use which::which;

use crate::assemble::{assemble_page, HtmlOptions};
use crate::error::ComposeError;
use crate::export::html::parse_bool_option;
use crate::export::{ExportOutput, Exporter};
use crate::project::Project;

/// Exporter that shells out to pandoc to generate DOCX files.
#[derive(Default)]
pub struct DocxExporter;

impl Exporter for DocxExporter {
    fn name(&self) -> &str {
        "docx"
    }

    fn description(&self) -> &str {
        "DOCX export via an external pandoc converter"
    }

    fn file_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn export(
        &self,
        project: &Project,
        options: &HashMap<String, String>,
    ) -> Result<ExportOutput, ComposeError> {
        let mut html_options = HtmlOptions::default();
        if let Some(raw) = options.get("numbered-headings") {
            html_options.render.numbered_headings = parse_bool_option("numbered-headings", raw)?;
        }

        let html = assemble_page(project, &html_options);
        let converter = options.get("converter").map(String::as_str);
        let reference_doc = options.get("reference-doc").map(String::as_str);
        let bytes = convert_html_to_docx(&html, converter, reference_doc)?;
        Ok(ExportOutput::Binary(bytes))
    }
}

fn convert_html_to_docx(
    html: &str,
    converter: Option<&str>,
    reference_doc: Option<&str>,
) -> Result<Vec<u8>, ComposeError> {
    let pandoc = resolve_converter_binary(converter)?;
    let temp_dir =
        tempdir().map_err(|e| ComposeError::ExportError(format!("Temp dir error: {e}")))?;
    let html_path = temp_dir.path().join("scrivo-export.html");
    let mut html_file =
        fs::File::create(&html_path).map_err(|e| ComposeError::ExportError(e.to_string()))?;
    html_file
        .write_all(html.as_bytes())
        .map_err(|e| ComposeError::ExportError(e.to_string()))?;

    let docx_path = temp_dir.path().join("scrivo-export.docx");

    let mut command = Command::new(&pandoc);
    command
        .arg("--from=html")
        .arg("--to=docx")
        .arg("--standalone")
        .arg(format!("--output={}", docx_path.display()));
    if let Some(reference) = reference_doc {
        command.arg(format!("--reference-doc={reference}"));
    }
    command.arg(&html_path);

    let status = command.status().map_err(|e| {
        ComposeError::ExportError(format!(
            "Failed to launch converter ({}): {}",
            pandoc.display(),
            e
        ))
    })?;

    if !status.success() {
        return Err(ComposeError::ExportError(format!(
            "Converter exited with status {status}"
        )));
    }

    fs::read(&docx_path).map_err(|e| ComposeError::ExportError(e.to_string()))
}

fn resolve_converter_binary(override_name: Option<&str>) -> Result<PathBuf, ComposeError> {
    if let Some(name) = override_name {
        if !name.is_empty() {
            let candidate = PathBuf::from(name);
            if candidate.exists() {
                return Ok(candidate);
            }
            return which(name).map_err(|_| {
                ComposeError::ExportError(format!("Converter '{name}' not found on PATH"))
            });
        }
    }

    if let Some(path) = env::var_os("SCRIVO_PANDOC_BIN") {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    if let Ok(path) = which("pandoc") {
        return Ok(path);
    }

    Err(ComposeError::ExportError(
        "Unable to locate a pandoc binary. Set SCRIVO_PANDOC_BIN to override the detection."
            .to_string(),
    ))
}
