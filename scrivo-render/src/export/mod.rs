//! Export targets for prepared projects
//!
//! Each target implements the [`Exporter`] trait and registers with the
//! [`ExporterRegistry`], which handles discovery, selection and dispatch.
//! Text targets (HTML) can return in-memory output; binary targets (DOCX)
//! go through a file.

#[cfg(feature = "native-export")]
mod docx;
mod html;

#[cfg(feature = "native-export")]
pub use docx::DocxExporter;
pub use html::HtmlExporter;

use std::collections::HashMap;

use crate::error::ComposeError;
use crate::project::Project;

/// Serialized output produced by an [`Exporter`].
pub enum ExportOutput {
    /// UTF-8 text output (e.g., HTML)
    Text(String),
    /// Binary output (e.g., DOCX)
    Binary(Vec<u8>),
}

impl ExportOutput {
    /// Consume the output and return the underlying bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            ExportOutput::Text(text) => text.into_bytes(),
            ExportOutput::Binary(bytes) => bytes,
        }
    }
}

/// Trait for export targets
///
/// Implementors turn a project into a serialized document. Options arrive
/// as a string map so configuration files and `--extra-*` CLI flags can
/// feed the same surface.
pub trait Exporter: Send + Sync {
    /// The name of this exporter (e.g., "html", "docx")
    fn name(&self) -> &str;

    /// Optional description of this exporter
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this exporter, without the dot.
    /// Used for automatic target detection from output filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Export the project, producing text or binary output.
    fn export(
        &self,
        project: &Project,
        options: &HashMap<String, String>,
    ) -> Result<ExportOutput, ComposeError>;
}

/// Registry of export targets
///
/// Provides a centralized registry for all available exporters.
/// Exporters can be registered and retrieved by name.
pub struct ExporterRegistry {
    exporters: HashMap<String, Box<dyn Exporter>>,
}

impl ExporterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ExporterRegistry {
            exporters: HashMap::new(),
        }
    }

    /// Register an exporter
    ///
    /// If an exporter with the same name already exists, it will be replaced.
    pub fn register<E: Exporter + 'static>(&mut self, exporter: E) {
        self.exporters
            .insert(exporter.name().to_string(), Box::new(exporter));
    }

    /// Get an exporter by name
    pub fn get(&self, name: &str) -> Result<&dyn Exporter, ComposeError> {
        self.exporters
            .get(name)
            .map(|e| e.as_ref())
            .ok_or_else(|| ComposeError::ExporterNotFound(name.to_string()))
    }

    /// Check if an exporter exists
    pub fn has(&self, name: &str) -> bool {
        self.exporters.contains_key(name)
    }

    /// List all available exporter names (sorted)
    pub fn list_exporters(&self) -> Vec<String> {
        let mut names: Vec<_> = self.exporters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect the export target from an output filename's extension.
    pub fn detect_exporter_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        for exporter in self.exporters.values() {
            if exporter.file_extensions().contains(&extension) {
                return Some(exporter.name().to_string());
            }
        }

        None
    }

    /// Export the project using the named target.
    pub fn export(
        &self,
        project: &Project,
        name: &str,
        options: &HashMap<String, String>,
    ) -> Result<ExportOutput, ComposeError> {
        self.get(name)?.export(project, options)
    }

    /// Create a registry with the built-in exporters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(html::HtmlExporter::default());
        #[cfg(feature = "native-export")]
        registry.register(docx::DocxExporter);

        registry
    }
}

impl Default for ExporterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
