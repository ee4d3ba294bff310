//! Physical lines of a retorno file.

use crate::kind::{classify, RecordKind};

/// Nominal width of every CNAB400 line, in characters.
pub const LINE_WIDTH: usize = 400;

/// A borrowed line together with its 1-based position in the file.
///
/// Columns are counted in characters, not bytes, so a Latin-1 file that was
/// decoded into a `String` keeps its column positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    text: &'a str,
    number: usize,
}

impl<'a> Line<'a> {
    /// Create a new line. `number` is 1-based.
    #[must_use]
    pub const fn new(text: &'a str, number: usize) -> Self {
        Self { text, number }
    }

    /// The line text, without terminator.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// The 1-based position of this line in its file.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Width of the line in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        if self.text.is_ascii() {
            self.text.len()
        } else {
            self.text.chars().count()
        }
    }

    /// Whether the line has exactly [`LINE_WIDTH`] columns.
    #[must_use]
    pub fn is_full_width(&self) -> bool {
        self.width() == LINE_WIDTH
    }

    /// The record discriminator (first character).
    #[must_use]
    pub fn discriminator(&self) -> Option<char> {
        self.text.chars().next()
    }

    /// Classify this line by its discriminator.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        classify(self.text)
    }

    /// Slice `length` columns starting at the 0-based `offset`.
    ///
    /// Returns `None` if the range does not fit inside the line.
    #[must_use]
    pub fn slice(&self, offset: usize, length: usize) -> Option<&'a str> {
        let end = offset.checked_add(length)?;
        if self.text.is_ascii() {
            return self.text.get(offset..end);
        }

        let mut bounds = self
            .text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(self.text.len()));
        let start_byte = bounds.nth(offset)?;
        let end_byte = if length == 0 {
            start_byte
        } else {
            bounds.nth(length - 1)?
        };
        self.text.get(start_byte..end_byte)
    }
}
