//! Import errors.

use thiserror::Error;

/// Errors that stop an import.
///
/// Decode problems inside a file are not errors; they travel as diagnostics
/// on the [`ImportResult`](crate::ImportResult). These variants are raised
/// only when no result can be produced, or when the configuration asks for a
/// problem to be fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// No importer is registered for the requested bank code.
    #[error("unsupported issuer '{code}'")]
    UnsupportedIssuer {
        /// The bank code that was requested.
        code: String,
    },

    /// The issuer could not be determined from the file header.
    #[error("could not identify the issuer from bank code '{found}' in the header")]
    UnidentifiedIssuer {
        /// Bank code found at header columns 77-79.
        found: String,
    },

    /// The file has no lines but a header is required.
    #[error("file has no header line")]
    MissingHeader,

    /// Strict mode found errors or an inconsistent trailer.
    #[error("file rejected: {errors} decode errors{}", mismatch_suffix(.count_mismatch))]
    Rejected {
        /// Number of error diagnostics.
        errors: usize,
        /// Whether the trailer count disagreed with the details.
        count_mismatch: bool,
    },
}

fn mismatch_suffix(count_mismatch: &bool) -> &'static str {
    if *count_mismatch {
        ", trailer count mismatch"
    } else {
        ""
    }
}
