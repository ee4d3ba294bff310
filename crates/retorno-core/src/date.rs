//! `DDMMYY` dates.
//!
//! CNAB400 dates carry a two-digit year that is always read as `20YY`.
//! A blank or all-zero field means "no date" (e.g. a credit date on a
//! record that was never settled).

use chrono::NaiveDate;
use thiserror::Error;

/// Why a `DDMMYY` field could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The field is not exactly six digits.
    #[error("expected 6 digits in DDMMYY date, got '{0}'")]
    NotDigits(String),
    /// Day or month out of calendar range.
    #[error("'{0}' is not a valid calendar date")]
    OutOfRange(String),
}

/// Decode a `DDMMYY` field.
///
/// Returns `Ok(None)` for a blank or all-zero field.
///
/// ```
/// use retorno_core::decode_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(decode_date("311214"), Ok(NaiveDate::from_ymd_opt(2014, 12, 31)));
/// assert_eq!(decode_date("000000"), Ok(None));
/// assert!(decode_date("320101").is_err());
/// ```
pub fn decode_date(raw: &str) -> Result<Option<NaiveDate>, DateError> {
    if raw.chars().all(|c| c == ' ' || c == '0') {
        return Ok(None);
    }
    if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::NotDigits(raw.to_string()));
    }

    let part = |range: std::ops::Range<usize>| -> u32 {
        raw[range]
            .bytes()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    };
    let day = part(0..2);
    let month = part(2..4);
    let year = 2000 + part(4..6) as i32;

    NaiveDate::from_ymd_opt(year, month, day)
        .map(Some)
        .ok_or_else(|| DateError::OutOfRange(raw.to_string()))
}

/// Decode a `DDMMYY` field and render it with a chrono format string.
///
/// ```
/// use retorno_core::reformat_date;
///
/// assert_eq!(reformat_date("311214", "%d/%m/%Y").unwrap().as_deref(), Some("31/12/2014"));
/// ```
pub fn reformat_date(raw: &str, format: &str) -> Result<Option<String>, DateError> {
    Ok(decode_date(raw)?.map(|date| date.format(format).to_string()))
}
