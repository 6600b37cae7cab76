//! Shared configuration loader for mwfilter.
//!
//! `defaults/mwfilter.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`MwfilterConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mwfilter_babel::RenderOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mwfilter.default.toml");

/// Top-level configuration consumed by mwfilter applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MwfilterConfig {
    pub render: RenderConfig,
    pub convert: ConvertConfig,
    pub logging: LoggingConfig,
}

/// Mirrors the knobs exposed by the Markdown renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub no_abspath: bool,
    pub no_yaml_frontmatter: bool,
    pub no_extension: bool,
    pub skip_attachments: bool,
    pub references_tags: Vec<String>,
}

impl From<RenderConfig> for RenderOptions {
    fn from(config: RenderConfig) -> Self {
        RenderOptions {
            no_abspath: config.no_abspath,
            no_yaml_frontmatter: config.no_yaml_frontmatter,
            no_extension: config.no_extension,
            skip_attachments: config.skip_attachments,
            references_tags: config.references_tags,
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        RenderOptions {
            no_abspath: config.no_abspath,
            no_yaml_frontmatter: config.no_yaml_frontmatter,
            no_extension: config.no_extension,
            skip_attachments: config.skip_attachments,
            references_tags: config.references_tags.clone(),
        }
    }
}

/// Batch conversion behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub skip_errors: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `warn` or `mwfilter_babel=debug`
    pub filter: String,
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

    /// Apply a single key/value override (CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<MwfilterConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MwfilterConfig, ConfigError> {
    Loader::new().build()
}
