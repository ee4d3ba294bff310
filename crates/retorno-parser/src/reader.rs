//! Field-by-field access to one line.

use crate::error::{Diagnostic, DiagnosticKind};
use chrono::NaiveDate;
use retorno_core::{decode_field, FieldSpec, FieldValue, Line};
use rust_decimal::Decimal;

/// Reads typed fields out of a single line, recording a diagnostic for each
/// field that fails instead of stopping.
///
/// A failed field reads as empty (`""` or `None`) and marks the record
/// invalid.
#[derive(Debug)]
pub struct FieldReader<'l, 'd> {
    line: Line<'l>,
    diagnostics: &'d mut Vec<Diagnostic>,
    valid: bool,
}

impl<'l, 'd> FieldReader<'l, 'd> {
    /// Create a reader over `line` that appends to `diagnostics`.
    pub fn new(line: Line<'l>, diagnostics: &'d mut Vec<Diagnostic>) -> Self {
        Self {
            line,
            diagnostics,
            valid: true,
        }
    }

    /// The line being read.
    #[must_use]
    pub const fn line(&self) -> Line<'l> {
        self.line
    }

    /// Whether every field read so far decoded cleanly.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Read a text field. Trailing padding is removed.
    pub fn text(&mut self, spec: &FieldSpec) -> String {
        match self.read(spec) {
            Some(FieldValue::Text(text)) => text,
            _ => String::new(),
        }
    }

    /// Read an unsigned integer field.
    pub fn integer(&mut self, spec: &FieldSpec) -> Option<u64> {
        self.read(spec).and_then(|value| value.as_integer())
    }

    /// Read an implied-decimal amount.
    pub fn amount(&mut self, spec: &FieldSpec) -> Option<Decimal> {
        self.read(spec).and_then(|value| value.as_amount())
    }

    /// Read a `DDMMYY` date. Blank dates read as `None` without a diagnostic.
    pub fn date(&mut self, spec: &FieldSpec) -> Option<NaiveDate> {
        self.read(spec).and_then(|value| value.as_date())
    }

    fn read(&mut self, spec: &FieldSpec) -> Option<FieldValue> {
        let Some(raw) = self.line.slice(spec.offset, spec.length) else {
            let width = self
                .line
                .width()
                .saturating_sub(spec.offset)
                .min(spec.length);
            self.fail(
                Diagnostic::new(DiagnosticKind::FieldOutOfBounds { width }, self.line.number())
                    .with_field(spec),
            );
            return None;
        };

        match decode_field(raw, spec) {
            Ok(value) => Some(value),
            Err(err) => {
                self.fail(Diagnostic::from_field_error(err, spec, self.line.number()));
                None
            }
        }
    }

    fn fail(&mut self, diagnostic: Diagnostic) {
        self.valid = false;
        self.diagnostics.push(diagnostic);
    }
}
