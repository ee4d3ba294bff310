//! Core types for retorno
//!
//! This crate provides the building blocks for decoding fixed-width CNAB400
//! "retorno" files:
//!
//! - [`Line`] - One physical line with its position in the file
//! - [`RecordKind`] - The record role selected by a line's first character
//! - [`FieldSpec`] / [`Layout`] - Column-positional field tables
//! - [`decode_field`] - The field codec (text, integer, implied decimal, DDMMYY date)
//! - [`format_amount`] / [`format_decimal`] - Brazilian currency rendering
//! - [`SettlementChannel`] / [`Occurrence`] - Entries of issuer code tables
//!
//! # Example
//!
//! ```
//! use retorno_core::{decode_field, FieldSpec, FieldValue, format_amount};
//! use rust_decimal_macros::dec;
//!
//! let spec = FieldSpec::amount("valor_titulo", 152, 13, 2);
//! let value = decode_field("0000000123456", &spec).unwrap();
//! assert_eq!(value, FieldValue::Amount(dec!(1234.56)));
//!
//! assert_eq!(format_amount("0000000123456", 2, true).as_deref(), Some("1.234,56"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod code;
pub mod codec;
pub mod date;
pub mod format;
pub mod kind;
pub mod layout;
pub mod line;

pub use code::{Availability, Occurrence, SettlementChannel};
pub use codec::{decode_field, FieldError, FieldValue};
pub use date::{decode_date, reformat_date};
pub use format::{format_amount, format_decimal};
pub use kind::{classify, RecordKind};
pub use layout::{FieldKind, FieldSpec, Layout, LayoutError};
pub use line::{Line, LINE_WIDTH};

// Re-export commonly used external types
pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;
