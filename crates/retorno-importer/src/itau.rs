//! Itaú retorno importer.

use crate::{HeaderSummary, ImportResult, Importer, ImporterConfig, ReturnEntry, TrailerTotals};
use anyhow::Result;
use retorno_parser::itau::{Detail, Header, Itau, Trailer};
use retorno_parser::{decode_str, Issuer, Located};

/// Importer for Banco Itaú (341) CNAB400 retorno files.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItauImporter;

impl ItauImporter {
    /// Create a new Itaú importer.
    pub const fn new() -> Self {
        Self
    }

    fn summarize_header(header: &Header) -> HeaderSummary {
        HeaderSummary {
            company: header.nome_empresa.clone(),
            agency: header.agencia.clone(),
            account: format!("{}-{}", header.conta, header.dac),
            generated_on: header.data_geracao,
            credit_date: header.data_credito,
            file_sequence: header.sequencial_arquivo,
        }
    }

    fn entry(detail: &Located<Detail>) -> ReturnEntry {
        ReturnEntry {
            line: detail.line,
            valid: detail.valid,
            nosso_numero: detail.nosso_numero.clone(),
            document: detail.numero_documento.clone(),
            occurrence_code: detail.codigo_ocorrencia.clone(),
            occurrence: detail.occurrence().map(|o| o.description),
            settled: detail.is_settlement(),
            occurrence_date: detail.data_ocorrencia,
            due_date: detail.vencimento,
            credit_date: detail.data_credito,
            face_value: detail.valor_titulo,
            credited: detail.valor_principal,
            tariff: detail.tarifa_cobranca,
            interest: detail.juros_mora_multa,
            settlement_code: detail.codigo_liquidacao.clone(),
            settlement: detail.settlement(),
            payer: detail.nome_pagador.clone(),
        }
    }

    fn totals(trailer: &Trailer) -> TrailerTotals {
        TrailerTotals {
            declared_details: trailer.qtde_detalhes,
            simple_count: trailer.qtde_titulos_simples,
            simple_total: trailer.valor_total_simples,
            informed_total: trailer.valor_total_informado,
        }
    }
}

impl Importer for ItauImporter {
    fn name(&self) -> &'static str {
        "itau"
    }

    fn bank_code(&self) -> &'static str {
        Itau::CODE
    }

    fn extract_string(&self, content: &str, config: &ImporterConfig) -> Result<ImportResult> {
        let file = decode_str::<Itau>(content);
        let mut result = ImportResult::empty(Itau::CODE);

        if let Some(header) = &file.header {
            let code = header.codigo_banco.as_str();
            if code != Itau::CODE {
                tracing::warn!("header bank code '{}' is not {}", code, Itau::CODE);
                result = result.with_warning(format!(
                    "header bank code '{code}' does not match {}",
                    Itau::CODE
                ));
            }
            result.header = Some(Self::summarize_header(header));
        }
        result.entries = file.details.iter().map(Self::entry).collect();
        result.totals = file.trailer.as_ref().map(|t| Self::totals(t));
        result.complete = file.is_complete();
        result.count_mismatch = file.count_mismatch;
        result.diagnostics = file.diagnostics;

        tracing::debug!(
            "extracted {} entries ({} diagnostics)",
            result.entries.len(),
            result.diagnostics.len()
        );
        Ok(result.enforce(config)?)
    }

    fn description(&self) -> &'static str {
        "Banco Itau CNAB400 retorno (cobranca)"
    }
}
