//! The part record
//!
//! A scrivo document is an ordered, flat sequence of parts. Hierarchy is
//! expressed through each part's `level` rather than through nesting, the
//! same way flat document formats express it through heading depth. The
//! outline pass derives `order` and `number` from the sequence, and the
//! render pass derives `html`; those three fields are recomputed on every
//! pass and are never persisted.

use serde::{Deserialize, Serialize};

/// One ordered unit of authored content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Stable identity within a project.
    #[serde(default)]
    pub id: u64,
    /// Author-assigned nesting depth (0 = top level).
    #[serde(default)]
    pub level: usize,
    /// Display title used to build the generated heading.
    #[serde(default)]
    pub name: String,
    /// Raw authored content. The source dialect (HTML fragment, Markdown
    /// or plain text) is detected at render time.
    #[serde(default)]
    pub text: String,
    /// Paths of attached images, rendered as figures after the body.
    #[serde(default)]
    pub images: Vec<String>,
    /// Whether the part participates in numbering, rendering and export.
    #[serde(default = "default_include")]
    pub include: bool,

    /// 1-based sequence index within this part's level, reset whenever a
    /// shallower-or-equal part appears. Output of the outline pass.
    #[serde(skip)]
    pub order: usize,
    /// Dot-joined outline number, e.g. "2.1.3". Output of the outline pass.
    #[serde(skip)]
    pub number: String,
    /// Rendered HTML fragment (generated heading + converted body).
    /// Output of the render pass.
    #[serde(skip)]
    pub html: String,
}

fn default_include() -> bool {
    true
}

impl Default for Part {
    fn default() -> Self {
        Self {
            id: 0,
            level: 0,
            name: String::new(),
            text: String::new(),
            images: Vec::new(),
            include: true,
            order: 0,
            number: String::new(),
            html: String::new(),
        }
    }
}

impl Part {
    /// Create a part with the given level, title and raw text.
    pub fn new(level: usize, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level,
            name: name.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set the part's stable id.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Attach an image path.
    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        self.images.push(path.into());
        self
    }
}
