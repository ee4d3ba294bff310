//! Location tracking for decoded records.

use retorno_core::FieldSpec;
use serde::Serialize;
use std::fmt;
use std::ops::{Deref, Range};

/// A column range within a line, 0-based and end-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColumnSpan {
    /// Start column (inclusive).
    pub start: usize,
    /// End column (exclusive).
    pub end: usize,
}

impl ColumnSpan {
    /// Create a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The span covered by a field.
    #[must_use]
    pub const fn of_field(spec: &FieldSpec) -> Self {
        Self {
            start: spec.offset,
            end: spec.offset + spec.length,
        }
    }

    /// Number of columns in this span.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Convert to a range.
    #[must_use]
    pub const fn into_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for ColumnSpan {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Renders the 1-based inclusive positions used by bank manuals.
impl fmt::Display for ColumnSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start + 1, self.end)
    }
}

/// A decoded record with the line it came from.
///
/// `valid` is false when any field of the record could not be decoded; the
/// record is still returned with those fields left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Located<T> {
    /// The decoded value.
    pub value: T,
    /// 1-based line number.
    pub line: usize,
    /// Whether every field decoded cleanly.
    pub valid: bool,
}

impl<T> Located<T> {
    /// Create a new located value.
    #[must_use]
    pub const fn new(value: T, line: usize, valid: bool) -> Self {
        Self { value, line, valid }
    }

    /// Map the inner value.
    #[must_use]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Located<U> {
        Located {
            value: f(self.value),
            line: self.line,
            valid: self.valid,
        }
    }

    /// Get a reference to the inner value.
    #[must_use]
    pub const fn inner(&self) -> &T {
        &self.value
    }

    /// Unwrap the located value, discarding the position.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Located<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}
