//! Record classification.
//!
//! A CNAB400 line announces its role in its first column. Classification is a
//! pure function of that character and never looks further into the line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The role of a line inside a retorno file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// File header, discriminator `'0'`.
    Header,
    /// Detail record, discriminator `'1'`.
    Detail,
    /// File trailer, discriminator `'9'`.
    Trailer,
    /// Any other first character, including an empty line.
    Unknown,
}

impl RecordKind {
    /// Map a discriminator character to its record kind.
    #[must_use]
    pub const fn from_discriminator(c: char) -> Self {
        match c {
            '0' => Self::Header,
            '1' => Self::Detail,
            '9' => Self::Trailer,
            _ => Self::Unknown,
        }
    }

    /// The discriminator character for this kind, if it has one.
    #[must_use]
    pub const fn discriminator(self) -> Option<char> {
        match self {
            Self::Header => Some('0'),
            Self::Detail => Some('1'),
            Self::Trailer => Some('9'),
            Self::Unknown => None,
        }
    }

    /// Get the lowercase name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Detail => "detail",
            Self::Trailer => "trailer",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a line by its first character.
///
/// ```
/// use retorno_core::{classify, RecordKind};
///
/// assert_eq!(classify("02RETORNO01COBRANCA"), RecordKind::Header);
/// assert_eq!(classify("1020001"), RecordKind::Detail);
/// assert_eq!(classify(""), RecordKind::Unknown);
/// ```
#[must_use]
pub fn classify(line: &str) -> RecordKind {
    line.chars()
        .next()
        .map_or(RecordKind::Unknown, RecordKind::from_discriminator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_discriminators() {
        assert_eq!(classify("0"), RecordKind::Header);
        assert_eq!(classify("1 anything"), RecordKind::Detail);
        assert_eq!(classify("9"), RecordKind::Trailer);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify("2"), RecordKind::Unknown);
        assert_eq!(classify(" 1"), RecordKind::Unknown);
        assert_eq!(classify("A"), RecordKind::Unknown);
        assert_eq!(classify(""), RecordKind::Unknown);
    }

    #[test]
    fn test_discriminator_roundtrip() {
        for kind in [RecordKind::Header, RecordKind::Detail, RecordKind::Trailer] {
            let c = kind.discriminator().unwrap();
            assert_eq!(RecordKind::from_discriminator(c), kind);
        }
        assert_eq!(RecordKind::Unknown.discriminator(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(RecordKind::Trailer.to_string(), "trailer");
    }
}
