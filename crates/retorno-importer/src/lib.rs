//! Import framework for retorno files
//!
//! This crate provides the infrastructure for reading retorno files from
//! disk, picking the right issuer and normalizing decoded details into
//! settlement entries.
//!
//! # Overview
//!
//! Each issuer is wrapped by an implementation of the [`Importer`] trait.
//! The [`ImporterRegistry`] selects one by bank code, either from the
//! configuration or from the header of the file.
//!
//! # Example
//!
//! ```rust,no_run
//! use retorno_importer::{ImporterConfig, ImporterRegistry};
//! use std::path::Path;
//!
//! let config = ImporterConfig::builder().bank("341").strict(true).build();
//! let registry = ImporterRegistry::with_defaults();
//! let result = registry.extract_file(Path::new("CN12345.RET"), &config)?;
//! for entry in &result.entries {
//!     println!("{} {:?}", entry.nosso_numero, entry.credited);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod itau;
pub mod registry;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use retorno_core::{Line, SettlementChannel};
use retorno_parser::{split_lines, Diagnostic};
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::Path;

pub use config::{Encoding, ImporterConfig};
pub use error::ImportError;
pub use itau::ItauImporter;
pub use registry::ImporterRegistry;

/// Header columns 77-79 hold the issuer's bank code.
const BANK_CODE_OFFSET: usize = 76;
const BANK_CODE_LENGTH: usize = 3;

/// Identification of the file from its header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderSummary {
    /// Company name.
    pub company: String,
    /// Agency.
    pub agency: String,
    /// Account with check digit.
    pub account: String,
    /// File generation date.
    pub generated_on: Option<NaiveDate>,
    /// Credit date of the file.
    pub credit_date: Option<NaiveDate>,
    /// File sequence number.
    pub file_sequence: Option<u64>,
}

/// One settlement event, normalized from a detail record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnEntry {
    /// 1-based line number of the detail.
    pub line: usize,
    /// Whether every field of the detail decoded cleanly.
    pub valid: bool,
    /// Nosso número.
    pub nosso_numero: String,
    /// Document number.
    pub document: String,
    /// Occurrence code.
    pub occurrence_code: String,
    /// Occurrence description, if the code is known.
    pub occurrence: Option<&'static str>,
    /// Whether the occurrence reports a payment.
    pub settled: bool,
    /// Occurrence date.
    pub occurrence_date: Option<NaiveDate>,
    /// Due date.
    pub due_date: Option<NaiveDate>,
    /// Credit date.
    pub credit_date: Option<NaiveDate>,
    /// Face value.
    pub face_value: Option<Decimal>,
    /// Amount credited.
    pub credited: Option<Decimal>,
    /// Collection tariff.
    pub tariff: Option<Decimal>,
    /// Interest and penalty.
    pub interest: Option<Decimal>,
    /// Settlement channel code.
    pub settlement_code: String,
    /// Settlement channel, if the code is known.
    pub settlement: Option<SettlementChannel>,
    /// Payer name.
    pub payer: String,
}

/// Totals declared by the trailer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrailerTotals {
    /// Declared number of details.
    pub declared_details: Option<u64>,
    /// Instruments in simple collection.
    pub simple_count: Option<u64>,
    /// Value in simple collection.
    pub simple_total: Option<Decimal>,
    /// Total value informed.
    pub informed_total: Option<Decimal>,
}

/// Result of an import operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportResult {
    /// Bank code of the issuer that decoded the file.
    pub issuer: String,
    /// Header identification, absent for an empty file.
    pub header: Option<HeaderSummary>,
    /// Settlement entries in file order.
    pub entries: Vec<ReturnEntry>,
    /// Trailer totals, absent when the file has no trailer.
    pub totals: Option<TrailerTotals>,
    /// Whether the file ends with a trailer.
    pub complete: bool,
    /// Whether the trailer's declared count differs from the entries.
    pub count_mismatch: bool,
    /// Decode diagnostics.
    pub diagnostics: Vec<Diagnostic>,
    /// Warnings encountered during import.
    pub warnings: Vec<String>,
}

impl ImportResult {
    /// Create an empty import result for an issuer.
    pub fn empty(issuer: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            header: None,
            entries: Vec::new(),
            totals: None,
            complete: false,
            count_mismatch: false,
            diagnostics: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add a warning to the result.
    #[must_use]
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Number of error-severity diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Whether any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Sum of the credited amounts of all entries.
    pub fn total_credited(&self) -> Decimal {
        self.entries.iter().filter_map(|e| e.credited).sum()
    }

    /// Apply the configured failure policy.
    ///
    /// `require_header` rejects a file with no lines; `strict` rejects a file
    /// with error diagnostics or a count mismatch.
    pub fn enforce(self, config: &ImporterConfig) -> Result<Self, ImportError> {
        if config.require_header && self.header.is_none() {
            return Err(ImportError::MissingHeader);
        }
        if config.strict && (self.has_errors() || self.count_mismatch) {
            return Err(ImportError::Rejected {
                errors: self.error_count(),
                count_mismatch: self.count_mismatch,
            });
        }
        Ok(self)
    }
}

/// Trait for retorno importers.
///
/// One implementation exists per issuing bank.
pub trait Importer: Send + Sync {
    /// Returns the name of this importer.
    fn name(&self) -> &str;

    /// Three-digit bank code handled by this importer.
    fn bank_code(&self) -> &str;

    /// Check if this importer can handle the given content.
    ///
    /// This looks only at the bank code in the header.
    fn identify(&self, content: &str) -> bool {
        header_bank_code(content) == Some(self.bank_code())
    }

    /// Extract entries from decoded file content.
    fn extract_string(&self, content: &str, config: &ImporterConfig) -> Result<ImportResult>;

    /// Read a file and extract its entries.
    fn extract_file(&self, path: &Path, config: &ImporterConfig) -> Result<ImportResult> {
        let content = read_content(path, config.encoding)?;
        self.extract_string(&content, config)
            .with_context(|| format!("Failed to extract from: {}", path.display()))
    }

    /// Returns a description of what this importer handles.
    fn description(&self) -> &str {
        self.name()
    }
}

/// Read a whole file and decode it with `encoding`.
pub fn read_content(path: &Path, encoding: Encoding) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    tracing::info!("read {} bytes from {}", bytes.len(), path.display());
    encoding
        .decode(bytes)
        .with_context(|| format!("Failed to decode file: {}", path.display()))
}

/// The bank code at header columns 77-79, if the first line is long enough.
pub fn header_bank_code(content: &str) -> Option<&str> {
    let first = split_lines(content).into_iter().next()?;
    Line::new(first, 1).slice(BANK_CODE_OFFSET, BANK_CODE_LENGTH)
}
