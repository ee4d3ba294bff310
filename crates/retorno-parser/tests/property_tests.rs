//! Property-based tests for retorno-parser.
//!
//! These tests verify decoder invariants hold for arbitrary inputs using proptest.
//!
//! Run with: cargo test -p retorno-parser --test `property_tests`

use proptest::prelude::*;
use retorno_core::Line;
use retorno_parser::itau::Itau;
use retorno_parser::{decode, decode_record, split_lines, Located};

// ============================================================================
// Arbitrary generators
// ============================================================================

/// A full-width line over the characters that occur in real files.
fn arb_full_line(discriminator: char) -> impl Strategy<Value = String> {
    "[0-9A-Z ]{399}".prop_map(move |rest| format!("{discriminator}{rest}"))
}

/// A line of any width and any leading character, including empty lines.
fn arb_any_line() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_full_line('1'),
        "[0-9A-Z ]{0,420}",
        arb_full_line('0'),
        arb_full_line('9'),
    ]
}

fn arb_file() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_any_line(), 0..12)
}

// ============================================================================
// Decoder Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Decoding a detail line twice gives identical records and diagnostics.
    #[test]
    fn prop_detail_decoding_deterministic(text in arb_full_line('1')) {
        let mut first_diags = Vec::new();
        let mut second_diags = Vec::new();
        let first: Located<<Itau as retorno_parser::Issuer>::Detail> =
            decode_record(Line::new(&text, 2), &mut first_diags);
        let second: Located<<Itau as retorno_parser::Issuer>::Detail> =
            decode_record(Line::new(&text, 2), &mut second_diags);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first_diags, second_diags);
    }

    /// Every detail-classified line yields exactly one detail, in order.
    #[test]
    fn prop_one_detail_per_detail_line(lines in arb_file()) {
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let file = decode::<Itau>(&refs);

        let expected: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.starts_with('1'))
            .map(|(i, _)| i + 1)
            .collect();
        let actual: Vec<usize> = file.details.iter().map(|d| d.line).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Diagnostics are reported in line order and never point past the input.
    #[test]
    fn prop_diagnostics_in_line_order(lines in arb_file()) {
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let file = decode::<Itau>(&refs);

        prop_assert!(file.diagnostics.windows(2).all(|w| w[0].line <= w[1].line));
        prop_assert!(file.diagnostics.iter().all(|d| d.line >= 1 && d.line <= lines.len()));
    }

    /// The mismatch flag is set exactly when a trailer disagrees with the details.
    #[test]
    fn prop_count_mismatch_consistent(lines in arb_file()) {
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let file = decode::<Itau>(&refs);

        let expected = file.trailer.as_ref().is_some_and(|t| {
            t.qtde_detalhes != Some(file.details.len() as u64)
        });
        prop_assert_eq!(file.count_mismatch, expected);
    }

    /// Full-width lines never produce a line-length diagnostic.
    #[test]
    fn prop_full_width_line_has_only_field_diagnostics(text in arb_full_line('9')) {
        let mut diagnostics = Vec::new();
        let _: Located<<Itau as retorno_parser::Issuer>::Trailer> =
            decode_record(Line::new(&text, 1), &mut diagnostics);
        prop_assert!(diagnostics.iter().all(|d| d.field.is_some()));
    }

    /// Joining lines with CRLF and splitting again is lossless.
    #[test]
    fn prop_split_lines_roundtrip(lines in prop::collection::vec(arb_full_line('1'), 1..6)) {
        let content = lines.join("\r\n") + "\r\n";
        let split = split_lines(&content);
        prop_assert_eq!(split, lines.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
