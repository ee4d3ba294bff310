//! Configuration for importers.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Character encoding of retorno files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// UTF-8. Invalid byte sequences are an error.
    #[serde(alias = "utf-8")]
    Utf8,
    /// ISO-8859-1. Every byte is one character, so columns stay exact.
    #[default]
    #[serde(alias = "iso-8859-1", alias = "latin-1")]
    Latin1,
}

impl Encoding {
    /// Decode raw file bytes into text.
    pub fn decode(self, bytes: Vec<u8>) -> Result<String> {
        match self {
            Self::Utf8 => String::from_utf8(bytes).context("file is not valid UTF-8"),
            Self::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }

    /// Get the canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Latin1 => "latin1",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Self::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(Self::Latin1),
            other => Err(format!("unknown encoding '{other}' (expected utf8 or latin1)")),
        }
    }
}

/// Configuration for an import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImporterConfig {
    /// Issuer bank code. When absent the issuer is identified from the
    /// header.
    pub bank: Option<String>,
    /// Encoding of the file bytes.
    pub encoding: Encoding,
    /// Treat a file with no lines as an error.
    pub require_header: bool,
    /// Reject files with decode errors or a trailer count mismatch.
    pub strict: bool,
}

impl ImporterConfig {
    /// Start building a configuration.
    pub fn builder() -> ImporterConfigBuilder {
        ImporterConfigBuilder::new()
    }

    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid importer configuration")
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }
}

/// Builder for importer configuration.
#[derive(Debug, Clone, Default)]
pub struct ImporterConfigBuilder {
    config: ImporterConfig,
}

impl ImporterConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the issuer bank code.
    pub fn bank(mut self, code: impl Into<String>) -> Self {
        self.config.bank = Some(code.into());
        self
    }

    /// Set the file encoding.
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.config.encoding = encoding;
        self
    }

    /// Set whether an empty file is an error.
    pub fn require_header(mut self, require: bool) -> Self {
        self.config.require_header = require;
        self
    }

    /// Set whether decode problems reject the file.
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ImporterConfig {
        self.config
    }
}
