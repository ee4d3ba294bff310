//! Currency rendering for implied-decimal amounts.
//!
//! Two styles are supported: a machine style with a plain `.` decimal point
//! (`1234.56`) and the Brazilian human style with `.` thousands separators
//! and a `,` decimal comma (`1.234,56`).

use rust_decimal::Decimal;

/// Render a raw implied-decimal digit run as a currency string.
///
/// The last `scale` digits are the fraction. A run shorter than `scale` is
/// read as if left-padded with zeros. Leading zeros of the integer part are
/// dropped. A blank run renders as zero. Returns `None` if `raw` contains
/// anything other than digits and surrounding spaces.
///
/// ```
/// use retorno_core::format_amount;
///
/// assert_eq!(format_amount("000000012345", 2, true).as_deref(), Some("123,45"));
/// assert_eq!(format_amount("000000012345", 2, false).as_deref(), Some("123.45"));
/// assert_eq!(format_amount("5", 2, true).as_deref(), Some("0,05"));
/// ```
#[must_use]
pub fn format_amount(raw: &str, scale: usize, human: bool) -> Option<String> {
    let digits = raw.trim_matches(' ');
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (int_part, frac_part) = if digits.len() > scale {
        digits.split_at(digits.len() - scale)
    } else {
        ("", digits)
    };
    Some(join_parts(int_part, &format!("{frac_part:0>scale$}"), human))
}

/// Render a decimal amount in machine or human style, keeping its scale.
///
/// ```
/// use retorno_core::format_decimal;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_decimal(dec!(1234567.89), true), "1.234.567,89");
/// assert_eq!(format_decimal(dec!(-0.50), false), "-0.50");
/// ```
#[must_use]
pub fn format_decimal(value: Decimal, human: bool) -> String {
    let text = value.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let body = join_parts(int_part, frac_part, human);
    if value.is_sign_negative() && !value.is_zero() {
        format!("-{body}")
    } else {
        body
    }
}

fn join_parts(int_part: &str, frac_part: &str, human: bool) -> String {
    let int_part = match int_part.trim_start_matches('0') {
        "" => "0",
        rest => rest,
    };

    let mut out = if human {
        group_thousands(int_part)
    } else {
        int_part.to_string()
    };
    if !frac_part.is_empty() {
        out.push(if human { ',' } else { '.' });
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
