//! The field codec.
//!
//! [`decode_field`] turns the raw text of one fixed-width column range into a
//! typed [`FieldValue`]. The codec knows nothing about lines or records; the
//! caller slices the line and attaches line numbers to any error.

use crate::date::{decode_date, DateError};
use crate::layout::{FieldKind, FieldSpec};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// A decoded field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text with trailing padding removed.
    Text(String),
    /// Unsigned integer.
    Integer(u64),
    /// Implied-decimal amount. The scale of the field is kept.
    Amount(Decimal),
    /// Date, or `None` for a blank date field.
    Date(Option<NaiveDate>),
    /// Filler content, discarded.
    Blank,
}

impl FieldValue {
    /// Get the text value, if this is a text field.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer value, if this is an integer field.
    #[must_use]
    pub const fn as_integer(&self) -> Option<u64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the amount, if this is an implied-decimal field.
    #[must_use]
    pub const fn as_amount(&self) -> Option<Decimal> {
        match self {
            Self::Amount(d) => Some(*d),
            _ => None,
        }
    }

    /// Get the date, if this is a non-blank date field.
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => *d,
            _ => None,
        }
    }
}

/// Errors produced by the field codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The raw text does not have the width the layout declares.
    #[error("field {field} expects {expected} columns, got {actual}")]
    LayoutViolation {
        /// Field name.
        field: &'static str,
        /// Declared length.
        expected: usize,
        /// Width of the raw text.
        actual: usize,
    },

    /// Non-digit characters in a numeric or date field.
    #[error("field {field} is not numeric: '{raw}'")]
    NotNumeric {
        /// Field name.
        field: &'static str,
        /// Raw field text.
        raw: String,
    },

    /// A `DDMMYY` field that is not a calendar date.
    #[error("field {field} is not a valid date: '{raw}'")]
    InvalidDate {
        /// Field name.
        field: &'static str,
        /// Raw field text.
        raw: String,
    },

    /// A digit run too large for the target type.
    #[error("field {field} overflows: '{raw}'")]
    Overflow {
        /// Field name.
        field: &'static str,
        /// Raw field text.
        raw: String,
    },
}

impl FieldError {
    /// Name of the field that failed.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::LayoutViolation { field, .. }
            | Self::NotNumeric { field, .. }
            | Self::InvalidDate { field, .. }
            | Self::Overflow { field, .. } => *field,
        }
    }

    /// Raw text of the field, when the failure is about its content.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::LayoutViolation { .. } => None,
            Self::NotNumeric { raw, .. }
            | Self::InvalidDate { raw, .. }
            | Self::Overflow { raw, .. } => Some(raw),
        }
    }
}

/// Decode the raw text of a field according to its spec.
///
/// `raw` must be exactly `spec.length` characters wide.
///
/// - Text: trailing spaces are trimmed, leading content is kept.
/// - Integer: all-blank or all-zero decodes to `0`.
/// - Implied decimal: the whole digit run is the mantissa, `scale` digits are
///   fractional. Blank decodes to zero at the field's scale.
/// - Date: `DDMMYY`, year `20YY`; blank or `000000` decodes to no date.
/// - Filler: only the width is checked.
pub fn decode_field(raw: &str, spec: &FieldSpec) -> Result<FieldValue, FieldError> {
    let width = raw.chars().count();
    if width != spec.length {
        return Err(FieldError::LayoutViolation {
            field: spec.name,
            expected: spec.length,
            actual: width,
        });
    }

    match spec.kind {
        FieldKind::Text => Ok(FieldValue::Text(raw.trim_end_matches(' ').to_string())),
        FieldKind::Integer => parse_digits(raw, spec).map(FieldValue::Integer),
        FieldKind::ImpliedDecimal { scale } => {
            let mantissa = parse_digits(raw, spec)?;
            Decimal::try_from_i128_with_scale(i128::from(mantissa), scale)
                .map(FieldValue::Amount)
                .map_err(|_| FieldError::Overflow {
                    field: spec.name,
                    raw: raw.to_string(),
                })
        }
        FieldKind::Date => decode_date(raw).map(FieldValue::Date).map_err(|e| match e {
            DateError::NotDigits(raw) => FieldError::NotNumeric {
                field: spec.name,
                raw,
            },
            DateError::OutOfRange(raw) => FieldError::InvalidDate {
                field: spec.name,
                raw,
            },
        }),
        FieldKind::Filler => Ok(FieldValue::Blank),
    }
}

fn parse_digits(raw: &str, spec: &FieldSpec) -> Result<u64, FieldError> {
    if raw.bytes().all(|b| b == b' ') {
        return Ok(0);
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::NotNumeric {
            field: spec.name,
            raw: raw.to_string(),
        });
    }
    raw.parse::<u64>().map_err(|_| FieldError::Overflow {
        field: spec.name,
        raw: raw.to_string(),
    })
}
