//! Project store: the ordered part sequence and its JSON persistence.
//!
//! A project file is plain JSON holding the authored fields only (id,
//! level, name, text, images, include). Computed fields are rebuilt by
//! [`Project::prepare`] after every load, so files stay stable across
//! re-exports and merge cleanly under version control.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::content::{self, RenderOptions};
use crate::error::ComposeError;
use crate::outline;
use crate::part::Part;

/// An ordered document project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Project {
    /// Create an empty project with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Load a project from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ComposeError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .map_err(|e| ComposeError::InvalidProject(format!("{}: {e}", path.display())))?;
        Self::from_json(&source)
    }

    /// Parse a project from JSON source.
    pub fn from_json(source: &str) -> Result<Self, ComposeError> {
        serde_json::from_str(source).map_err(|e| ComposeError::InvalidProject(e.to_string()))
    }

    /// Write the project to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ComposeError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json)
            .map_err(|e| ComposeError::InvalidProject(format!("{}: {e}", path.display())))
    }

    /// Serialize the project to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ComposeError> {
        serde_json::to_string_pretty(self).map_err(|e| ComposeError::InvalidProject(e.to_string()))
    }

    /// Renumber and re-render the included parts with default options.
    pub fn prepare(&mut self) {
        self.prepare_with(&RenderOptions::default());
    }

    /// Renumber and re-render the included parts.
    ///
    /// Excluded parts consume no outline numbers and keep no stale output.
    /// Idempotent; safe to run before every export or display refresh.
    pub fn prepare_with(&mut self, options: &RenderOptions) {
        for part in self.parts.iter_mut().filter(|p| !p.include) {
            part.order = 0;
            part.number.clear();
            part.html.clear();
        }
        outline::number(self.parts.iter_mut().filter(|p| p.include));
        content::render_with(self.parts.iter_mut().filter(|p| p.include), options);
    }

    /// The parts that participate in export, in order.
    pub fn included_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter().filter(|p| p.include)
    }
}
