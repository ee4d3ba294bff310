//! Integration tests for the retorno decoder.
//!
//! Tests decoding the Itaú fixture and the lenient handling of broken files.

use chrono::NaiveDate;
use retorno_core::{Availability, RecordKind};
use retorno_parser::itau::{Detail, Itau};
use retorno_parser::{decode, decode_str, split_lines, DiagnosticKind, Issuer, Located, Severity};
use rust_decimal_macros::dec;
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}

fn fixture_lines() -> Vec<String> {
    split_lines(&fixture("itau_retorno.ret"))
        .into_iter()
        .map(String::from)
        .collect()
}

/// Overwrite columns starting at the 0-based `offset`.
fn patch(line: &str, offset: usize, text: &str) -> String {
    let mut chars: Vec<char> = line.chars().collect();
    for (i, c) in text.chars().enumerate() {
        chars[offset + i] = c;
    }
    chars.into_iter().collect()
}

fn decode_owned(lines: &[String]) -> retorno_parser::DecodedFile<Itau> {
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    decode::<Itau>(&refs)
}

// ============================================================================
// Well-formed file
// ============================================================================

#[test]
fn test_fixture_header() {
    let file = decode_str::<Itau>(&fixture("itau_retorno.ret"));
    let header = file.header.as_ref().unwrap();

    assert!(header.valid);
    assert_eq!(header.line, 1);
    assert_eq!(header.literal_retorno, "RETORNO");
    assert_eq!(header.literal_servico, "COBRANCA");
    assert_eq!(header.agencia, "0057");
    assert_eq!(header.conta, "72192");
    assert_eq!(header.dac, "2");
    assert_eq!(header.nome_empresa, "ACME COMERCIO DE PECAS LTDA");
    assert_eq!(header.codigo_banco, Itau::CODE);
    assert_eq!(header.nome_banco, "BANCO ITAU SA");
    assert_eq!(header.data_geracao, NaiveDate::from_ymd_opt(2015, 1, 15));
    assert_eq!(header.densidade, Some(1600));
    assert_eq!(header.sequencial_arquivo, Some(42));
    assert_eq!(header.data_credito, NaiveDate::from_ymd_opt(2015, 1, 16));
    assert_eq!(header.numero_sequencial, Some(1));
}

#[test]
fn test_fixture_details() {
    let file = decode_str::<Itau>(&fixture("itau_retorno.ret"));

    assert_eq!(file.details.len(), 3);
    assert_eq!(
        file.details.iter().map(|d| d.line).collect::<Vec<_>>(),
        vec![2, 3, 4]
    );

    let first = &file.details[0];
    assert_eq!(first.nosso_numero, "00012345");
    assert_eq!(first.uso_empresa, "NF-1001");
    assert_eq!(first.codigo_ocorrencia, "06");
    assert_eq!(first.vencimento, NaiveDate::from_ymd_opt(2015, 1, 10));
    assert_eq!(first.valor_titulo, Some(dec!(1500.00)));
    assert_eq!(first.tarifa_cobranca, Some(dec!(2.50)));
    assert_eq!(first.valor_principal, Some(dec!(1500.00)));
    assert_eq!(first.juros_mora_multa, Some(dec!(12.30)));
    assert_eq!(first.data_credito, NaiveDate::from_ymd_opt(2015, 1, 16));
    assert_eq!(first.nome_pagador, "JOSE DA SILVA");
    assert_eq!(first.codigo_liquidacao, "AA");
    assert_eq!(first.numero_sequencial, Some(2));

    let channel = first.settlement().unwrap();
    assert_eq!(channel.description, "CAIXA ELETRONICO BANCO ITAU");
    assert_eq!(channel.availability, Availability::Available);
    assert_eq!(first.occurrence().unwrap().description, "LIQUIDACAO NORMAL");
    assert!(first.is_settlement());

    let second = &file.details[1];
    assert_eq!(second.valor_titulo, Some(dec!(23456.78)));
    assert_eq!(
        second.settlement().unwrap().availability,
        Availability::PendingClearance
    );

    let third = &file.details[2];
    assert_eq!(third.data_credito, None);
    assert_eq!(third.codigo_liquidacao, "");
    assert_eq!(third.settlement(), None);
    assert!(!third.is_settlement());
}

#[test]
fn test_fixture_trailer() {
    let file = decode_str::<Itau>(&fixture("itau_retorno.ret"));
    let trailer = file.trailer.as_ref().unwrap();

    assert_eq!(trailer.line, 5);
    assert_eq!(trailer.qtde_titulos_simples, Some(3));
    assert_eq!(trailer.valor_total_simples, Some(dec!(25955.78)));
    assert_eq!(trailer.controle_arquivo, Some(42));
    assert_eq!(trailer.qtde_detalhes, Some(3));
    assert_eq!(trailer.valor_total_informado, Some(dec!(25955.78)));

    assert!(!file.count_mismatch);
    assert!(file.is_complete());
    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);
    assert_eq!(file.stats.total_lines, 5);
    assert_eq!(file.stats.skipped_lines, 0);
    assert_eq!(file.stats.invalid_records, 0);
}

#[test]
fn test_detail_decoding_is_deterministic() {
    let lines = fixture_lines();
    assert_eq!(decode_owned(&lines), decode_owned(&lines));
}

// ============================================================================
// Integrity checks
// ============================================================================

#[test]
fn test_trailer_count_mismatch() {
    let mut lines = fixture_lines();
    lines[4] = patch(&lines[4], 212, "00000005");
    let file = decode_owned(&lines);

    assert_eq!(file.details.len(), 3);
    assert!(file.count_mismatch);
    assert_eq!(file.diagnostics.len(), 1);
    let diag = &file.diagnostics[0];
    assert_eq!(diag.line, 5);
    assert_eq!(diag.severity(), Severity::Warning);
    assert_eq!(
        diag.kind,
        DiagnosticKind::CountMismatch {
            declared: Some(5),
            actual: 3
        }
    );
}

#[test]
fn test_diagnostics_by_severity() {
    let mut lines = fixture_lines();
    lines[1] = patch(&lines[1], 152, "X");
    lines[4] = patch(&lines[4], 212, "00000005");
    let file = decode_owned(&lines);

    let errors: Vec<_> = file.diagnostics_of(Severity::Error).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line, 2);
    assert_eq!(errors[0].field, Some("valor_titulo"));

    let warnings: Vec<_> = file.diagnostics_of(Severity::Warning).collect();
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0].kind, DiagnosticKind::CountMismatch { .. }));
}

#[test]
fn test_eof_marker_after_trailer() {
    let content = fixture_lines().join("\r\n") + "\u{1a}";
    let file = decode_str::<Itau>(&content);

    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);
    assert_eq!(file.details.len(), 3);
    assert!(file.trailer.as_ref().is_some_and(|t| t.valid));
    assert!(!file.count_mismatch);
}

#[test]
fn test_empty_input() {
    let file = decode::<Itau>(&[]);
    assert!(file.is_empty());
    assert!(file.details.is_empty());
    assert!(file.trailer.is_none());
    assert!(!file.count_mismatch);
    assert!(file.diagnostics.is_empty());

    assert!(decode_str::<Itau>("").is_empty());
    assert!(decode_str::<Itau>("\r\n\r\n").is_empty());
}

#[test]
fn test_missing_trailer() {
    let mut lines = fixture_lines();
    lines.pop();
    let file = decode_owned(&lines);

    assert_eq!(file.details.len(), 3);
    assert!(file.trailer.is_none());
    assert!(!file.count_mismatch);
    assert_eq!(file.diagnostics.len(), 1);
    assert_eq!(file.diagnostics[0].kind, DiagnosticKind::MissingTrailer);
    assert_eq!(file.diagnostics[0].line, 4);
}

#[test]
fn test_header_without_discriminator() {
    let mut lines = fixture_lines();
    lines[0] = patch(&lines[0], 0, "X");
    let file = decode_owned(&lines);

    assert!(file.header.is_some());
    assert!(file.stats.unexpected_header);
    assert_eq!(
        file.diagnostics[0].kind,
        DiagnosticKind::UnexpectedHeaderDiscriminator(Some('X'))
    );
    assert_eq!(file.details.len(), 3);
}

// ============================================================================
// Lenient decoding
// ============================================================================

#[test]
fn test_short_line_keeps_decoding() {
    let mut lines = fixture_lines();
    lines[2] = lines[2].chars().take(300).collect();
    let file = decode_owned(&lines);

    assert_eq!(file.details.len(), 3);
    let short = &file.details[1];
    assert!(!short.valid);
    assert_eq!(short.nosso_numero, "00012346");
    assert_eq!(short.codigo_liquidacao, "");
    assert!(file.details[0].valid);
    assert!(file.details[2].valid);

    assert_eq!(
        file.diagnostics[0].kind,
        DiagnosticKind::LineLength {
            expected: 400,
            actual: 300
        }
    );
    assert!(file.diagnostics.iter().all(|d| d.line == 3));
    assert!(file.has_errors());
    assert_eq!(file.stats.invalid_records, 1);
}

#[test]
fn test_bad_amount_is_reported_with_raw_text() {
    let mut lines = fixture_lines();
    lines[1] = patch(&lines[1], 152, "00000015O0000");
    let file = decode_owned(&lines);

    let detail = &file.details[0];
    assert!(!detail.valid);
    assert_eq!(detail.valor_titulo, None);
    assert_eq!(detail.valor_principal, Some(dec!(1500.00)));

    assert_eq!(file.diagnostics.len(), 1);
    let diag = &file.diagnostics[0];
    assert_eq!(diag.kind, DiagnosticKind::NotNumeric);
    assert_eq!(diag.line, 2);
    assert_eq!(diag.field, Some("valor_titulo"));
    assert_eq!(diag.raw.as_deref(), Some("00000015O0000"));
    assert_eq!(diag.code(), "R0003");
}

#[test]
fn test_invalid_date() {
    let mut lines = fixture_lines();
    lines[1] = patch(&lines[1], 146, "320115");
    let file = decode_owned(&lines);

    assert_eq!(file.details[0].vencimento, None);
    assert_eq!(file.diagnostics[0].kind, DiagnosticKind::InvalidDate);
    assert_eq!(file.diagnostics[0].raw.as_deref(), Some("320115"));
}

#[test]
fn test_unknown_and_misplaced_lines_are_skipped() {
    let mut lines = fixture_lines();
    let header = lines[0].clone();
    let trailer = lines[4].clone();
    lines.insert(2, format!("5{}", " ".repeat(399)));
    lines.insert(3, header);
    lines.insert(4, trailer);
    let file = decode_owned(&lines);

    assert_eq!(file.details.len(), 3);
    assert!(!file.count_mismatch);
    assert_eq!(file.stats.skipped_lines, 3);

    let kinds: Vec<_> = file.diagnostics.iter().map(|d| (d.line, d.kind.clone())).collect();
    assert_eq!(
        kinds,
        vec![
            (3, DiagnosticKind::UnknownRecordType(Some('5'))),
            (4, DiagnosticKind::MisplacedRecord(RecordKind::Header)),
            (5, DiagnosticKind::MisplacedRecord(RecordKind::Trailer)),
        ]
    );
}

#[test]
fn test_non_ascii_text_keeps_column_positions() {
    let mut lines = fixture_lines();
    lines[1] = patch(&lines[1], 324, "JOÃO DA CONCEIÇÃO");
    let file = decode_owned(&lines);

    let detail: &Located<Detail> = &file.details[0];
    assert!(detail.valid);
    assert_eq!(detail.nome_pagador, "JOÃO DA CONCEIÇÃO");
    assert_eq!(detail.codigo_liquidacao, "AA");
}

// ============================================================================
// Line splitting and output
// ============================================================================

#[test]
fn test_split_lines() {
    assert_eq!(split_lines("a\r\nb\nc"), vec!["a", "b", "c"]);
    assert_eq!(split_lines("a\r\nb\r\n\r\n  \r\n"), vec!["a", "b"]);
    assert_eq!(split_lines("a\r\nb\r\n\u{1a}"), vec!["a", "b"]);
    assert_eq!(split_lines("a\r\nb\u{1a}"), vec!["a", "b"]);
    assert_eq!(split_lines("\u{feff}a\n"), vec!["a"]);
    assert!(split_lines("").is_empty());
}

#[test]
fn test_serializes_to_json() {
    let file = decode_str::<Itau>(&fixture("itau_retorno.ret"));
    let json = serde_json::to_value(&file).unwrap();

    assert_eq!(json["count_mismatch"], false);
    assert_eq!(json["details"][0]["value"]["nosso_numero"], "00012345");
    assert_eq!(json["details"][0]["line"], 2);
    assert_eq!(json["trailer"]["value"]["qtde_detalhes"], 3);
    assert_eq!(file.to_string(), "BANCO ITAU SA retorno: 5 lines, 3 details, 0 diagnostics");
}
