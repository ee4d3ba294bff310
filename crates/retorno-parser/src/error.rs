//! Decode diagnostics.
//!
//! Decoding never aborts on bad content. Every problem found on a line is
//! recorded as a [`Diagnostic`] carrying the line number and, when the
//! problem is confined to one field, the field name and its raw text.

use crate::span::ColumnSpan;
use retorno_core::{FieldError, FieldSpec, RecordKind, LINE_WIDTH};
use serde::Serialize;
use std::fmt;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Content could not be decoded as declared.
    Error,
    /// The file is readable but not what was expected.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A problem found while decoding a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// The kind of problem.
    pub kind: DiagnosticKind,
    /// 1-based line number.
    pub line: usize,
    /// Name of the offending field, if any.
    pub field: Option<&'static str>,
    /// Columns of the offending field, if any.
    pub span: Option<ColumnSpan>,
    /// Raw text of the offending field, preserved verbatim.
    pub raw: Option<String>,
}

impl Diagnostic {
    /// Create a new line-level diagnostic.
    #[must_use]
    pub const fn new(kind: DiagnosticKind, line: usize) -> Self {
        Self {
            kind,
            line,
            field: None,
            span: None,
            raw: None,
        }
    }

    /// Attach the field this diagnostic is about.
    #[must_use]
    pub fn with_field(mut self, spec: &FieldSpec) -> Self {
        self.field = Some(spec.name);
        self.span = Some(ColumnSpan::of_field(spec));
        self
    }

    /// Attach the raw text of the offending field.
    #[must_use]
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    /// Build a diagnostic from a codec failure on `line`.
    #[must_use]
    pub fn from_field_error(err: FieldError, spec: &FieldSpec, line: usize) -> Self {
        let diagnostic = match err {
            FieldError::LayoutViolation { actual, .. } => {
                Self::new(DiagnosticKind::FieldOutOfBounds { width: actual }, line)
            }
            FieldError::NotNumeric { raw, .. } => {
                Self::new(DiagnosticKind::NotNumeric, line).with_raw(raw)
            }
            FieldError::InvalidDate { raw, .. } => {
                Self::new(DiagnosticKind::InvalidDate, line).with_raw(raw)
            }
            FieldError::Overflow { raw, .. } => {
                Self::new(DiagnosticKind::Overflow, line).with_raw(raw)
            }
        };
        diagnostic.with_field(spec)
    }

    /// Stable code for this kind of diagnostic, e.g. `R0003`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match &self.kind {
            DiagnosticKind::LineLength { .. } => "R0001",
            DiagnosticKind::FieldOutOfBounds { .. } => "R0002",
            DiagnosticKind::NotNumeric => "R0003",
            DiagnosticKind::InvalidDate => "R0004",
            DiagnosticKind::Overflow => "R0005",
            DiagnosticKind::UnknownRecordType(_) => "R0006",
            DiagnosticKind::MisplacedRecord(_) => "R0007",
            DiagnosticKind::UnexpectedHeaderDiscriminator(_) => "R0008",
            DiagnosticKind::MissingTrailer => "R0009",
            DiagnosticKind::CountMismatch { .. } => "R0010",
        }
    }

    /// Get a short label for the diagnostic.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match &self.kind {
            DiagnosticKind::LineLength { .. } => "wrong line length",
            DiagnosticKind::FieldOutOfBounds { .. } => "field out of bounds",
            DiagnosticKind::NotNumeric => "not numeric",
            DiagnosticKind::InvalidDate => "invalid date",
            DiagnosticKind::Overflow => "numeric overflow",
            DiagnosticKind::UnknownRecordType(_) => "unknown record type",
            DiagnosticKind::MisplacedRecord(_) => "misplaced record",
            DiagnosticKind::UnexpectedHeaderDiscriminator(_) => "unexpected header",
            DiagnosticKind::MissingTrailer => "missing trailer",
            DiagnosticKind::CountMismatch { .. } => "count mismatch",
        }
    }

    /// Severity of this diagnostic.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match &self.kind {
            DiagnosticKind::LineLength { .. }
            | DiagnosticKind::FieldOutOfBounds { .. }
            | DiagnosticKind::NotNumeric
            | DiagnosticKind::InvalidDate
            | DiagnosticKind::Overflow => Severity::Error,
            DiagnosticKind::UnknownRecordType(_)
            | DiagnosticKind::MisplacedRecord(_)
            | DiagnosticKind::UnexpectedHeaderDiscriminator(_)
            | DiagnosticKind::MissingTrailer
            | DiagnosticKind::CountMismatch { .. } => Severity::Warning,
        }
    }

    /// Whether this diagnostic is an error rather than a warning.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity(), Severity::Error)
    }

    /// Get the diagnostic message.
    #[must_use]
    pub fn message(&self) -> String {
        format!("{}", self.kind)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.line)?;
        if let (Some(field), Some(span)) = (self.field, self.span) {
            write!(f, ", {field} ({span})")?;
        }
        write!(f, ": {}", self.kind)?;
        if let Some(raw) = &self.raw {
            write!(f, " '{raw}'")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

/// Kinds of decode diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "detail", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The line is not [`LINE_WIDTH`] columns wide.
    LineLength {
        /// Required width.
        expected: usize,
        /// Width found.
        actual: usize,
    },
    /// A field lies past the end of a short line.
    FieldOutOfBounds {
        /// Columns available for the field.
        width: usize,
    },
    /// Non-digit characters in a numeric field.
    NotNumeric,
    /// A date field that is not a calendar date.
    InvalidDate,
    /// A digit run too large for its type.
    Overflow,
    /// A line whose discriminator is not a known record type.
    UnknownRecordType(Option<char>),
    /// A header or trailer line found where only details may appear.
    MisplacedRecord(RecordKind),
    /// The first line does not start with the header discriminator.
    UnexpectedHeaderDiscriminator(Option<char>),
    /// The last line is not a trailer.
    MissingTrailer,
    /// The trailer's declared detail count differs from the details decoded.
    CountMismatch {
        /// Count declared by the trailer, if it decoded.
        declared: Option<u64>,
        /// Details actually decoded.
        actual: usize,
    },
}

impl DiagnosticKind {
    /// Diagnostic for a line of the wrong width.
    #[must_use]
    pub const fn line_length(actual: usize) -> Self {
        Self::LineLength {
            expected: LINE_WIDTH,
            actual,
        }
    }
}

fn describe(discriminator: Option<char>) -> String {
    discriminator.map_or_else(|| "empty line".to_string(), |c| format!("'{c}'"))
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LineLength { expected, actual } => {
                write!(f, "line has {actual} columns, expected {expected}")
            }
            Self::FieldOutOfBounds { width } => {
                write!(f, "field lies outside the line ({width} columns available)")
            }
            Self::NotNumeric => write!(f, "field is not numeric"),
            Self::InvalidDate => write!(f, "field is not a valid DDMMYY date"),
            Self::Overflow => write!(f, "numeric field overflows"),
            Self::UnknownRecordType(c) => {
                write!(f, "unknown record type {}, line skipped", describe(*c))
            }
            Self::MisplacedRecord(kind) => {
                write!(f, "{kind} record outside its position, line skipped")
            }
            Self::UnexpectedHeaderDiscriminator(c) => {
                write!(f, "first line starts with {}, expected '0'", describe(*c))
            }
            Self::MissingTrailer => write!(f, "last line is not a trailer"),
            Self::CountMismatch { declared, actual } => match declared {
                Some(n) => write!(f, "trailer declares {n} details, found {actual}"),
                None => write!(f, "trailer detail count unreadable, found {actual}"),
            },
        }
    }
}
