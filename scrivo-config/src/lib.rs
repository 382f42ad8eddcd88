//! Shared configuration loader for the scrivo toolchain.
//!
//! `defaults/scrivo.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`ScrivoConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use scrivo_render::content::RenderOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/scrivo.default.toml");

/// Top-level configuration consumed by scrivo applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrivoConfig {
    pub render: RenderConfig,
    pub export: ExportConfig,
}

/// Knobs for the per-part render pass.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub numbered_headings: bool,
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        RenderOptions {
            numbered_headings: config.numbered_headings,
        }
    }
}

/// Exporter-specific configuration groups.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub html: HtmlExportConfig,
    pub docx: DocxExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlExportConfig {
    pub theme: String,
    #[serde(default)]
    pub custom_css: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocxExportConfig {
    #[serde(default)]
    pub converter: Option<String>,
    #[serde(default)]
    pub reference_doc: Option<String>,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ScrivoConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ScrivoConfig, ConfigError> {
    Loader::new().build()
}
