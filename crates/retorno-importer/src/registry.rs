//! Registry for importers.

use crate::{
    header_bank_code, read_content, ImportError, ImportResult, Importer, ImporterConfig,
    ItauImporter,
};
use anyhow::{Context, Result};
use retorno_parser::split_lines;
use std::path::Path;
use std::sync::Arc;

/// Registry of importers.
///
/// The registry holds one importer per bank code and picks the one to use
/// for a file, either from the configured bank or from the file header.
pub struct ImporterRegistry {
    importers: Vec<Arc<dyn Importer>>,
}

impl ImporterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            importers: Vec::new(),
        }
    }

    /// Create a registry with every built-in importer.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(ItauImporter::new());
        registry
    }

    /// Register a new importer.
    pub fn register(&mut self, importer: impl Importer + 'static) {
        self.importers.push(Arc::new(importer));
    }

    /// Get the importer for a bank code.
    pub fn by_code(&self, code: &str) -> Result<Arc<dyn Importer>, ImportError> {
        let code = code.trim();
        self.importers
            .iter()
            .find(|importer| importer.bank_code() == code)
            .map(Arc::clone)
            .ok_or_else(|| ImportError::UnsupportedIssuer {
                code: code.to_string(),
            })
    }

    /// Find an importer that can handle the given content.
    pub fn identify(&self, content: &str) -> Option<Arc<dyn Importer>> {
        for importer in &self.importers {
            if importer.identify(content) {
                return Some(Arc::clone(importer));
            }
        }
        None
    }

    /// Extract entries from content using the appropriate importer.
    ///
    /// A configured bank wins over identification. Content with no lines
    /// and no configured bank yields an empty result.
    pub fn extract_string(&self, content: &str, config: &ImporterConfig) -> Result<ImportResult> {
        let importer = match &config.bank {
            Some(code) => self.by_code(code)?,
            None => match self.identify(content) {
                Some(importer) => importer,
                None if split_lines(content).is_empty() => {
                    tracing::debug!("empty retorno content, no issuer to identify");
                    return Ok(ImportResult::empty("")
                        .with_warning("file is empty")
                        .enforce(config)?);
                }
                None => {
                    return Err(ImportError::UnidentifiedIssuer {
                        found: header_bank_code(content).unwrap_or_default().to_string(),
                    }
                    .into())
                }
            },
        };

        tracing::debug!("using importer '{}'", importer.name());
        importer.extract_string(content, config)
    }

    /// Extract entries from a file using the appropriate importer.
    pub fn extract_file(&self, path: &Path, config: &ImporterConfig) -> Result<ImportResult> {
        let content = read_content(path, config.encoding)?;
        self.extract_string(&content, config)
            .with_context(|| format!("Failed to extract from: {}", path.display()))
    }

    /// List all registered importers.
    pub fn list_importers(&self) -> Vec<(&str, &str, &str)> {
        self.importers
            .iter()
            .map(|i| (i.bank_code(), i.name(), i.description()))
            .collect()
    }

    /// Get the number of registered importers.
    pub fn len(&self) -> usize {
        self.importers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.importers.is_empty()
    }
}

impl Default for ImporterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
