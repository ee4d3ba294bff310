//! File-level decoding.
//!
//! The first line is the header, the last line is the trailer, and every
//! line between them starting with `'1'` is a detail. Problems never abort
//! decoding; they are collected as diagnostics.

use crate::error::{Diagnostic, DiagnosticKind, Severity};
use crate::issuer::{DetailCount, Issuer};
use crate::record::decode_record;
use crate::span::Located;
use retorno_core::{Line, RecordKind};
use serde::Serialize;
use std::fmt;

/// Line accounting for a decoded file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DecodeStats {
    /// Lines in the input.
    pub total_lines: usize,
    /// Lines skipped as unknown or misplaced.
    pub skipped_lines: usize,
    /// Whether line 1 did not carry the header discriminator.
    pub unexpected_header: bool,
    /// Records with at least one field that failed to decode.
    pub invalid_records: usize,
}

/// The result of decoding a retorno file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct DecodedFile<I: Issuer> {
    /// Header decoded from the first line. `None` only for empty input.
    pub header: Option<Located<I::Header>>,
    /// Details in file order.
    pub details: Vec<Located<I::Detail>>,
    /// Trailer decoded from the last line, if it is a trailer.
    pub trailer: Option<Located<I::Trailer>>,
    /// Whether the trailer's declared detail count differs from
    /// `details.len()`. Always false without a trailer.
    pub count_mismatch: bool,
    /// Line accounting.
    pub stats: DecodeStats,
    /// Every problem found, in line order.
    pub diagnostics: Vec<Diagnostic>,
}

impl<I: Issuer> Default for DecodedFile<I> {
    fn default() -> Self {
        Self {
            header: None,
            details: Vec::new(),
            trailer: None,
            count_mismatch: false,
            stats: DecodeStats::default(),
            diagnostics: Vec::new(),
        }
    }
}

impl<I: Issuer> DecodedFile<I> {
    /// Whether the input had no lines at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.header.is_none()
    }

    /// Whether the file ends with a trailer.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.trailer.is_some()
    }

    /// Whether any error-severity diagnostic was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Diagnostics of the given severity.
    pub fn diagnostics_of(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity() == severity)
    }
}

impl<I: Issuer> fmt::Display for DecodedFile<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} retorno: {} lines, {} details, {} diagnostics",
            I::NAME,
            self.stats.total_lines,
            self.details.len(),
            self.diagnostics.len()
        )
    }
}

/// Split file content into lines.
///
/// Accepts `\n` and `\r\n` terminators, drops a leading byte-order mark and
/// drops trailing blank lines or a DOS end-of-file marker (`0x1A`), whether
/// it sits on its own line or right after the last record.
#[must_use]
pub fn split_lines(content: &str) -> Vec<&str> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let content = content.strip_suffix('\u{1a}').unwrap_or(content);
    let mut lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    while lines
        .last()
        .is_some_and(|line| line.trim_matches(|c| c == ' ' || c == '\u{1a}').is_empty())
    {
        lines.pop();
    }
    lines
}

/// Decode file content with issuer `I`.
#[must_use]
pub fn decode_str<I: Issuer>(content: &str) -> DecodedFile<I> {
    decode::<I>(&split_lines(content))
}

/// Decode an ordered sequence of lines with issuer `I`.
///
/// Line 1 is always decoded as the header, even when its discriminator is
/// not `'0'` (a warning is recorded). The last line is the trailer only if it
/// starts with `'9'`. Header or trailer lines anywhere else, and lines with an
/// unknown discriminator, are skipped with a warning.
#[must_use]
pub fn decode<I: Issuer>(lines: &[&str]) -> DecodedFile<I> {
    let mut file = DecodedFile::<I>::default();
    let Some(first) = lines.first() else {
        tracing::debug!("empty retorno input");
        return file;
    };
    file.stats.total_lines = lines.len();
    let last_index = lines.len() - 1;
    let diagnostics = &mut file.diagnostics;

    let header_line = Line::new(first, 1);
    if header_line.kind() != RecordKind::Header {
        tracing::warn!(
            "line 1 starts with {:?}, decoding it as the header anyway",
            header_line.discriminator()
        );
        file.stats.unexpected_header = true;
        diagnostics.push(Diagnostic::new(
            DiagnosticKind::UnexpectedHeaderDiscriminator(header_line.discriminator()),
            1,
        ));
    }
    file.header = Some(decode_record::<I::Header>(header_line, diagnostics));

    for (index, text) in lines.iter().enumerate() {
        let line = Line::new(text, index + 1);
        match line.kind() {
            RecordKind::Detail => {
                file.details.push(decode_record::<I::Detail>(line, diagnostics));
            }
            _ if index == 0 => {}
            RecordKind::Trailer if index == last_index => {}
            RecordKind::Unknown => {
                file.stats.skipped_lines += 1;
                diagnostics.push(Diagnostic::new(
                    DiagnosticKind::UnknownRecordType(line.discriminator()),
                    line.number(),
                ));
            }
            kind => {
                file.stats.skipped_lines += 1;
                diagnostics.push(Diagnostic::new(
                    DiagnosticKind::MisplacedRecord(kind),
                    line.number(),
                ));
            }
        }
    }

    let last_line = Line::new(lines[last_index], last_index + 1);
    if last_line.kind() == RecordKind::Trailer {
        let trailer = decode_record::<I::Trailer>(last_line, diagnostics);
        let declared = trailer.declared_details();
        let actual = file.details.len();
        if declared != u64::try_from(actual).ok() {
            tracing::warn!(
                "trailer declares {:?} details but {} were decoded",
                declared,
                actual
            );
            file.count_mismatch = true;
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::CountMismatch { declared, actual },
                last_line.number(),
            ));
        }
        file.trailer = Some(trailer);
    } else {
        tracing::warn!(
            "line {} is not a trailer, file may be truncated",
            last_line.number()
        );
        diagnostics.push(Diagnostic::new(
            DiagnosticKind::MissingTrailer,
            last_line.number(),
        ));
    }

    file.stats.invalid_records = file.header.iter().filter(|h| !h.valid).count()
        + file.details.iter().filter(|d| !d.valid).count()
        + file.trailer.iter().filter(|t| !t.valid).count();

    tracing::debug!(
        "decoded {} retorno: {} lines, {} details, {} diagnostics",
        I::NAME,
        file.stats.total_lines,
        file.details.len(),
        file.diagnostics.len()
    );
    file
}
