//! Column-positional field tables.
//!
//! A [`Layout`] is plain data: an ordered table of [`FieldSpec`]s describing
//! where each field of one record kind lives in a line. Supporting a new
//! issuer means writing new tables, not new decode logic.

use serde::Serialize;
use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// How the raw text of a field is turned into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKind {
    /// Alphanumeric text, `X(n)`.
    Text,
    /// Unsigned integer, `9(n)`.
    Integer,
    /// Digits with `scale` implied fractional digits, `9(n)V9(scale)`.
    ImpliedDecimal {
        /// Number of fractional digits.
        scale: u32,
    },
    /// Calendar date in `DDMMYY` form.
    Date,
    /// Blanks or zeros that complete the record.
    Filler,
}

impl FieldKind {
    /// Short name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::ImpliedDecimal { .. } => "implied decimal",
            Self::Date => "date",
            Self::Filler => "filler",
        }
    }
}

/// One field of a fixed-width layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldSpec {
    /// Field identifier. Matches the record field it decodes into.
    pub name: &'static str,
    /// Zero-based start column.
    pub offset: usize,
    /// Number of columns.
    pub length: usize,
    /// Decoder for the raw text.
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Create a field spec.
    #[must_use]
    pub const fn new(name: &'static str, offset: usize, length: usize, kind: FieldKind) -> Self {
        Self {
            name,
            offset,
            length,
            kind,
        }
    }

    /// An alphanumeric field.
    #[must_use]
    pub const fn text(name: &'static str, offset: usize, length: usize) -> Self {
        Self::new(name, offset, length, FieldKind::Text)
    }

    /// An unsigned integer field.
    #[must_use]
    pub const fn integer(name: &'static str, offset: usize, length: usize) -> Self {
        Self::new(name, offset, length, FieldKind::Integer)
    }

    /// An implied-decimal amount field.
    #[must_use]
    pub const fn amount(name: &'static str, offset: usize, length: usize, scale: u32) -> Self {
        Self::new(name, offset, length, FieldKind::ImpliedDecimal { scale })
    }

    /// A `DDMMYY` date field.
    #[must_use]
    pub const fn date(name: &'static str, offset: usize, length: usize) -> Self {
        Self::new(name, offset, length, FieldKind::Date)
    }

    /// A filler field whose content is discarded.
    #[must_use]
    pub const fn filler(name: &'static str, offset: usize, length: usize) -> Self {
        Self::new(name, offset, length, FieldKind::Filler)
    }

    /// Exclusive end column.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.length
    }

    /// Column range covered by this field.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    /// Whether the field is a filler.
    #[must_use]
    pub const fn is_filler(&self) -> bool {
        matches!(self.kind, FieldKind::Filler)
    }

    /// Whether two fields share at least one column.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.offset < other.end() && other.offset < self.end()
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Positions are shown 1-based, the way bank manuals print them.
        write!(
            f,
            "{} {:03}-{:03} ({})",
            self.name,
            self.offset + 1,
            self.end(),
            self.kind.name()
        )
    }
}

/// Problems found when checking that a layout tiles its record width.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Columns not covered by any field.
    #[error("layout {layout}: columns {}-{} are not covered", .start + 1, .end)]
    Gap {
        /// Layout name.
        layout: &'static str,
        /// First uncovered column (0-based).
        start: usize,
        /// End of the uncovered run (exclusive).
        end: usize,
    },

    /// Two fields claim the same column.
    #[error("layout {layout}: fields {first} and {second} overlap")]
    Overlap {
        /// Layout name.
        layout: &'static str,
        /// Field that starts first.
        first: &'static str,
        /// Field that starts inside `first`.
        second: &'static str,
    },

    /// A field extends past the record width.
    #[error("layout {layout}: field {field} ends at column {end}, past width {width}")]
    OutOfBounds {
        /// Layout name.
        layout: &'static str,
        /// Offending field.
        field: &'static str,
        /// Exclusive end column of the field.
        end: usize,
        /// Record width.
        width: usize,
    },

    /// Two fields share a name.
    #[error("layout {layout}: field name {field} is declared twice")]
    DuplicateName {
        /// Layout name.
        layout: &'static str,
        /// Duplicated field name.
        field: &'static str,
    },
}

/// An ordered field table for one record kind of one issuer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layout {
    /// Layout name, e.g. `"itau.detail"`.
    pub name: &'static str,
    /// Field table. Data fields and fillers, in any order.
    pub fields: &'static [FieldSpec],
}

impl Layout {
    /// Create a layout from a static field table.
    #[must_use]
    pub const fn new(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { name, fields }
    }

    /// Look up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Iterate over the fields that carry data.
    pub fn data_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|f| !f.is_filler())
    }

    /// Sum of all field lengths, fillers included.
    #[must_use]
    pub const fn covered_width(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].length;
            i += 1;
        }
        total
    }

    /// Whether the table covers exactly `width` columns with no gaps and no
    /// overlaps.
    ///
    /// This is a `const fn` so issuer tables can be checked at compile time:
    ///
    /// ```
    /// use retorno_core::{FieldSpec, Layout};
    ///
    /// const FIELDS: &[FieldSpec] = &[
    ///     FieldSpec::text("tipo", 0, 1),
    ///     FieldSpec::filler("brancos", 1, 3),
    /// ];
    /// const LAYOUT: Layout = Layout::new("demo", FIELDS);
    /// const _: () = assert!(LAYOUT.tiles(4));
    /// ```
    #[must_use]
    pub const fn tiles(&self, width: usize) -> bool {
        if self.covered_width() != width {
            return false;
        }
        let mut i = 0;
        while i < self.fields.len() {
            let field = &self.fields[i];
            if field.length == 0 || field.end() > width {
                return false;
            }
            let mut j = i + 1;
            while j < self.fields.len() {
                if field.overlaps(&self.fields[j]) {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }

    /// Check that the table covers exactly `width` columns, reporting the
    /// first problem found.
    pub fn check(&self, width: usize) -> Result<(), LayoutError> {
        let mut sorted: Vec<&FieldSpec> = self.fields.iter().collect();
        sorted.sort_by_key(|f| (f.offset, f.length));

        for (i, field) in sorted.iter().enumerate() {
            if sorted[..i].iter().any(|f| f.name == field.name) {
                return Err(LayoutError::DuplicateName {
                    layout: self.name,
                    field: field.name,
                });
            }
            if field.end() > width {
                return Err(LayoutError::OutOfBounds {
                    layout: self.name,
                    field: field.name,
                    end: field.end(),
                    width,
                });
            }
        }

        let mut cursor = 0;
        let mut previous: Option<&FieldSpec> = None;
        for field in sorted {
            if field.offset > cursor {
                return Err(LayoutError::Gap {
                    layout: self.name,
                    start: cursor,
                    end: field.offset,
                });
            }
            if field.offset < cursor {
                return Err(LayoutError::Overlap {
                    layout: self.name,
                    first: previous.map_or("", |p| p.name),
                    second: field.name,
                });
            }
            cursor = field.end();
            previous = Some(field);
        }

        if cursor < width {
            return Err(LayoutError::Gap {
                layout: self.name,
                start: cursor,
                end: width,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: Layout = Layout::new(
        "good",
        &[
            FieldSpec::text("tipo", 0, 1),
            FieldSpec::filler("brancos", 4, 6),
            FieldSpec::integer("numero", 1, 3),
        ],
    );

    #[test]
    fn test_tiles_in_any_order() {
        assert!(GOOD.tiles(10));
        assert!(!GOOD.tiles(11));
        assert_eq!(GOOD.check(10), Ok(()));
    }

    #[test]
    fn test_check_reports_gap() {
        const GAP: Layout = Layout::new(
            "gap",
            &[FieldSpec::text("a", 0, 2), FieldSpec::text("b", 4, 6)],
        );
        assert!(!GAP.tiles(10));
        assert_eq!(
            GAP.check(10),
            Err(LayoutError::Gap {
                layout: "gap",
                start: 2,
                end: 4
            })
        );
    }

    #[test]
    fn test_check_reports_trailing_gap() {
        const SHORT: Layout = Layout::new("short", &[FieldSpec::text("a", 0, 8)]);
        let err = SHORT.check(10).unwrap_err();
        assert_eq!(err.to_string(), "layout short: columns 9-10 are not covered");
    }

    #[test]
    fn test_check_reports_overlap() {
        const OVERLAP: Layout = Layout::new(
            "overlap",
            &[
                FieldSpec::text("a", 0, 5),
                FieldSpec::text("b", 3, 5),
                FieldSpec::filler("c", 8, 2),
            ],
        );
        // Lengths sum to the width, but two fields collide and column 5..8 is
        // double-booked.
        assert!(!OVERLAP.tiles(12));
        assert_eq!(
            OVERLAP.check(12),
            Err(LayoutError::Overlap {
                layout: "overlap",
                first: "a",
                second: "b"
            })
        );
    }

    #[test]
    fn test_check_reports_out_of_bounds() {
        const WIDE: Layout = Layout::new("wide", &[FieldSpec::text("a", 0, 12)]);
        assert!(matches!(
            WIDE.check(10),
            Err(LayoutError::OutOfBounds { end: 12, .. })
        ));
    }

    #[test]
    fn test_check_reports_duplicate_name() {
        const DUP: Layout = Layout::new(
            "dup",
            &[FieldSpec::text("a", 0, 5), FieldSpec::text("a", 5, 5)],
        );
        assert!(matches!(
            DUP.check(10),
            Err(LayoutError::DuplicateName { field: "a", .. })
        ));
    }

    #[test]
    fn test_field_lookup_and_data_fields() {
        assert_eq!(GOOD.field("numero").map(|f| f.offset), Some(1));
        assert!(GOOD.field("missing").is_none());
        let names: Vec<_> = GOOD.data_fields().map(|f| f.name).collect();
        assert_eq!(names, vec!["tipo", "numero"]);
    }

    #[test]
    fn test_display_uses_manual_positions() {
        let spec = FieldSpec::amount("valor_titulo", 152, 13, 2);
        assert_eq!(spec.to_string(), "valor_titulo 153-165 (implied decimal)");
    }
}
