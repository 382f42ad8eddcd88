//! Project publishing pipeline.
//!
//! Provides a high-level API for exporting projects to output formats.
//! This module bridges the gap between the exporter registry and file I/O,
//! handling both in-memory and file-based output.
//!
//! Use this for host-application commands like "Export to DOCX" where you
//! want a single call that handles target selection, preparation,
//! serialization, and optional file writing. For more control over the
//! pipeline, use [`ExporterRegistry`] directly.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ComposeError;
use crate::export::{ExportOutput, ExporterRegistry};
use crate::project::Project;

/// Specifies how to publish a project.
///
/// Use the builder pattern to configure the publication:
///
/// ```ignore
/// let spec = PublishSpec::new(&project, "html")
///     .with_output_path("output.html")
///     .with_option("theme", "book");
/// ```
///
/// If no output path is provided, text targets return in-memory content.
/// Binary targets (like DOCX) require an explicit output path.
#[derive(Debug)]
pub struct PublishSpec<'a> {
    /// The project to export.
    pub project: &'a Project,
    /// Target exporter name (e.g., "html", "docx").
    pub exporter: &'a str,
    /// Optional file path for writing output. Required for binary targets.
    pub output: Option<PathBuf>,
    /// Exporter-specific options (e.g., theme selection, converter binary).
    pub options: HashMap<String, String>,
}

impl<'a> PublishSpec<'a> {
    /// Creates a new publish specification for the given project and target.
    pub fn new(project: &'a Project, exporter: &'a str) -> Self {
        Self {
            project,
            exporter,
            output: None,
            options: HashMap::new(),
        }
    }

    /// Sets the output file path. If provided, content is written to disk.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds an exporter-specific option (e.g., theme, reference doc).
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// The output from a successful publish operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    /// Content held in memory (for text targets without an output path).
    InMemory(String),
    /// Path to the written file (when an output path was specified).
    File(PathBuf),
}

/// Result of a publish operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    /// The published artifact (in-memory content or file path).
    pub artifact: PublishArtifact,
}

/// Publishes a project according to the specification.
///
/// Uses the default exporter registry to find the appropriate target. The
/// exporter prepares its own snapshot of the project (renumber + render),
/// so the caller's project is never mutated.
///
/// # Errors
///
/// Returns [`ComposeError`] if:
/// - The exporter is not registered
/// - Export fails (including external converter failures)
/// - File I/O fails
/// - A binary target is requested without an output path
pub fn publish(spec: PublishSpec<'_>) -> Result<PublishResult, ComposeError> {
    let registry = ExporterRegistry::with_defaults();
    let output = registry.export(spec.project, spec.exporter, &spec.options)?;
    match output {
        ExportOutput::Text(text) => write_or_return_text(text, spec.output),
        ExportOutput::Binary(bytes) => write_binary(bytes, spec.output),
    }
}

fn write_or_return_text(
    text: String,
    output: Option<PathBuf>,
) -> Result<PublishResult, ComposeError> {
    if let Some(path) = output {
        write_to_path(path, text.into_bytes()).map(|path| PublishResult {
            artifact: PublishArtifact::File(path),
        })
    } else {
        Ok(PublishResult {
            artifact: PublishArtifact::InMemory(text),
        })
    }
}

fn write_binary(bytes: Vec<u8>, output: Option<PathBuf>) -> Result<PublishResult, ComposeError> {
    let path = output.ok_or_else(|| {
        ComposeError::ExportError("binary targets require an explicit output path".to_string())
    })?;
    write_to_path(path, bytes).map(|path| PublishResult {
        artifact: PublishArtifact::File(path),
    })
}

fn write_to_path(path: PathBuf, bytes: Vec<u8>) -> Result<PathBuf, ComposeError> {
    fs::write(&path, &bytes)
        .map(|_| path.clone())
        .map_err(|err| ComposeError::ExportError(err.to_string()))
}
