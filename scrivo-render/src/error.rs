//! Error types for compose and export operations

use std::fmt;

/// Errors that can occur while preparing or exporting a project
#[derive(Debug, Clone, PartialEq)]
pub enum ComposeError {
    /// Exporter not found in registry
    ExporterNotFound(String),
    /// Project file could not be read, written or parsed
    InvalidProject(String),
    /// Error while producing an export artifact
    ExportError(String),
    /// Operation not supported by the selected exporter
    NotSupported(String),
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::ExporterNotFound(name) => write!(f, "Exporter '{name}' not found"),
            ComposeError::InvalidProject(msg) => write!(f, "Invalid project: {msg}"),
            ComposeError::ExportError(msg) => write!(f, "Export error: {msg}"),
            ComposeError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for ComposeError {}
