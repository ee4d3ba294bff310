//! CNAB400 retorno file decoder.
//!
//! This crate turns the lines of a retorno file into typed header, detail
//! and trailer records, along with any diagnostics found on the way.
//!
//! # Features
//!
//! - Lenient decoding (continues after bad lines and bad fields)
//! - Line numbers, field names and raw text on every diagnostic
//! - Record layouts declared once with [`cnab_record!`] and checked at
//!   compile time
//! - Issuers plugged in through the [`Issuer`] trait
//!
//! # Example
//!
//! ```
//! use retorno_parser::{decode_str, itau::Itau};
//!
//! let content = format!(
//!     "{:<400}\n{:<400}\n{:<212}{:08}{:<180}\n",
//!     "02RETORNO01COBRANCA", "1", "9201341", 1, ""
//! );
//! let file = decode_str::<Itau>(&content);
//! assert_eq!(file.details.len(), 1);
//! assert!(!file.count_mismatch);
//! assert!(file.diagnostics.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod decoder;
mod error;
pub mod issuer;
pub mod itau;
mod reader;
mod record;
mod span;

pub use decoder::{decode, decode_str, split_lines, DecodeStats, DecodedFile};
pub use error::{Diagnostic, DiagnosticKind, Severity};
pub use issuer::{DetailCount, Issuer};
pub use reader::FieldReader;
pub use record::{decode_record, Record};
pub use span::{ColumnSpan, Located};

#[doc(hidden)]
pub mod __private {
    pub use chrono::NaiveDate;
    pub use retorno_core::{FieldSpec, Layout, RecordKind, LINE_WIDTH};
    pub use rust_decimal::Decimal;
}
