//! Shared configuration loader for the instinct toolchain.
//!
//! `defaults/instinct.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`InstinctConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use instinct_parser::instinct::{ContentTrim, ParseOptions};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const DEFAULT_TOML: &str = include_str!("../defaults/instinct.default.toml");

/// Top-level configuration consumed by instinct applications.
#[derive(Debug, Clone, Deserialize)]
pub struct InstinctConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

/// Mirrors [`ParseOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub content_trim: ContentTrim,
    pub require_id: bool,
    pub strict: bool,
}

impl ParserConfig {
    pub fn to_options(&self) -> ParseOptions {
        ParseOptions {
            content_trim: self.content_trim,
            require_id: self.require_id,
            strict: self.strict,
        }
    }
}

impl From<&ParserConfig> for ParseOptions {
    fn from(config: &ParserConfig) -> Self {
        config.to_options()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Yaml,
    Summary,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Json,
        OutputFormat::Yaml,
        OutputFormat::Summary,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Summary => "summary",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Json => "Pretty-printed JSON array of records",
            OutputFormat::Yaml => "YAML sequence of records",
            OutputFormat::Summary => "One line per record: id, domain, confidence, trigger",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| format!("unknown output format '{}'", s))
    }
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
    pub fn build(self) -> Result<InstinctConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<InstinctConfig, ConfigError> {
    Loader::new().build()
}
