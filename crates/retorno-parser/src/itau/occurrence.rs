//! Itaú occurrence codes (CNAB400 note 17).

use retorno_core::Occurrence;

/// Every occurrence Itaú reports in a detail record, in code order.
pub const OCCURRENCES: &[Occurrence] = &[
    Occurrence::new("02", "ENTRADA CONFIRMADA"),
    Occurrence::new("03", "ENTRADA REJEITADA"),
    Occurrence::new(
        "04",
        "ALTERACAO DE DADOS - NOVA ENTRADA OU ALTERACAO/EXCLUSAO DE DADOS ACATADA",
    ),
    Occurrence::new("05", "ALTERACAO DE DADOS - BAIXA"),
    Occurrence::new("06", "LIQUIDACAO NORMAL"),
    Occurrence::new("07", "LIQUIDACAO PARCIAL - COBRANCA INTELIGENTE (B2B)"),
    Occurrence::new("08", "LIQUIDACAO EM CARTORIO"),
    Occurrence::new("09", "BAIXA SIMPLES"),
    Occurrence::new("10", "BAIXA POR TER SIDO LIQUIDADO"),
    Occurrence::new("11", "EM SER (SO NO RETORNO MENSAL)"),
    Occurrence::new("12", "ABATIMENTO CONCEDIDO"),
    Occurrence::new("13", "ABATIMENTO CANCELADO"),
    Occurrence::new("14", "VENCIMENTO ALTERADO"),
    Occurrence::new("15", "BAIXAS REJEITADAS"),
    Occurrence::new("16", "INSTRUCOES REJEITADAS"),
    Occurrence::new("17", "ALTERACAO/EXCLUSAO DE DADOS REJEITADOS"),
    Occurrence::new(
        "18",
        "COBRANCA CONTRATUAL - INSTRUCOES/ALTERACOES REJEITADAS/PENDENTES",
    ),
    Occurrence::new("19", "CONFIRMA RECEBIMENTO DE INSTRUCAO DE PROTESTO"),
    Occurrence::new(
        "20",
        "CONFIRMA RECEBIMENTO DE INSTRUCAO DE SUSTACAO DE PROTESTO/TARIFA",
    ),
    Occurrence::new("21", "CONFIRMA RECEBIMENTO DE INSTRUCAO DE NAO PROTESTAR"),
    Occurrence::new("23", "TITULO ENVIADO A CARTORIO/TARIFA"),
    Occurrence::new("24", "INSTRUCAO DE PROTESTO REJEITADA/SUSTADA/PENDENTE"),
    Occurrence::new("25", "ALEGACOES DO PAGADOR"),
    Occurrence::new("26", "TARIFA DE AVISO DE COBRANCA"),
    Occurrence::new("27", "TARIFA DE EXTRATO POSICAO"),
    Occurrence::new("28", "TARIFA DE RELACAO DAS LIQUIDACOES"),
    Occurrence::new("29", "TARIFA DE MANUTENCAO DE TITULOS VENCIDOS"),
    Occurrence::new("30", "DEBITO MENSAL DE TARIFAS (PARA ENTRADAS E BAIXAS)"),
    Occurrence::new("32", "BAIXA POR TER SIDO PROTESTADO"),
    Occurrence::new("33", "CUSTAS DE PROTESTO"),
    Occurrence::new("34", "CUSTAS DE SUSTACAO"),
    Occurrence::new("35", "CUSTAS DE CARTORIO DISTRIBUIDOR"),
    Occurrence::new("36", "CUSTAS DE EDITAL"),
    Occurrence::new(
        "37",
        "TARIFA DE EMISSAO DE BOLETO/TARIFA DE ENVIO DE DUPLICATA",
    ),
    Occurrence::new("38", "TARIFA DE INSTRUCAO"),
    Occurrence::new("39", "TARIFA DE OCORRENCIAS"),
    Occurrence::new(
        "40",
        "TARIFA MENSAL DE EMISSAO DE BOLETO/TARIFA MENSAL DE ENVIO DE DUPLICATA",
    ),
    Occurrence::new("41", "DEBITO MENSAL DE TARIFAS - EXTRATO DE POSICAO"),
    Occurrence::new("42", "DEBITO MENSAL DE TARIFAS - OUTRAS INSTRUCOES"),
    Occurrence::new(
        "43",
        "DEBITO MENSAL DE TARIFAS - MANUTENCAO DE TITULOS VENCIDOS",
    ),
    Occurrence::new("44", "DEBITO MENSAL DE TARIFAS - OUTRAS OCORRENCIAS"),
    Occurrence::new("45", "DEBITO MENSAL DE TARIFAS - PROTESTO"),
    Occurrence::new("46", "DEBITO MENSAL DE TARIFAS - SUSTACAO DE PROTESTO"),
    Occurrence::new("47", "BAIXA COM TRANSFERENCIA PARA DESCONTO"),
    Occurrence::new("48", "CUSTAS DE SUSTACAO JUDICIAL"),
    Occurrence::new(
        "51",
        "TARIFA MENSAL REF A ENTRADAS BANCOS CORRESPONDENTES NA CARTEIRA",
    ),
    Occurrence::new("52", "TARIFA MENSAL BAIXAS NA CARTEIRA"),
    Occurrence::new(
        "53",
        "TARIFA MENSAL BAIXAS EM BANCOS CORRESPONDENTES NA CARTEIRA",
    ),
    Occurrence::new("54", "TARIFA MENSAL DE LIQUIDACOES NA CARTEIRA"),
    Occurrence::new(
        "55",
        "TARIFA MENSAL DE LIQUIDACOES EM BANCOS CORRESPONDENTES NA CARTEIRA",
    ),
    Occurrence::new("56", "CUSTAS DE IRREGULARIDADE"),
    Occurrence::new("57", "INSTRUCAO CANCELADA"),
    Occurrence::new("59", "BAIXA POR CREDITO EM C/C ATRAVES DO SISPAG"),
    Occurrence::new("60", "ENTRADA REJEITADA CARNE"),
    Occurrence::new("61", "TARIFA EMISSAO AVISO DE MOVIMENTACAO DE TITULOS"),
    Occurrence::new(
        "62",
        "DEBITO MENSAL DE TARIFA - AVISO DE MOVIMENTACAO DE TITULOS",
    ),
    Occurrence::new("63", "TITULO SUSTADO JUDICIALMENTE"),
    Occurrence::new("64", "ENTRADA CONFIRMADA COM RATEIO DE CREDITO"),
    Occurrence::new("65", "PAGAMENTO COM CHEQUE - AGUARDANDO COMPENSACAO"),
    Occurrence::new("69", "CHEQUE DEVOLVIDO"),
    Occurrence::new("71", "ENTRADA REGISTRADA, AGUARDANDO AVALIACAO"),
    Occurrence::new(
        "72",
        "BAIXA POR CREDITO EM C/C ATRAVES DO SISPAG SEM TITULO CORRESPONDENTE",
    ),
    Occurrence::new(
        "73",
        "CONFIRMACAO DE ENTRADA NA COBRANCA SIMPLES - ENTRADA NAO ACEITA NA COBRANCA CONTRATUAL",
    ),
    Occurrence::new("76", "CHEQUE COMPENSADO"),
];

/// Occurrence codes that mean the instrument was paid.
pub const SETTLED: &[&str] = &["06", "07", "08", "10"];

/// Look up an occurrence by its two-digit code.
#[must_use]
pub fn describe(code: &str) -> Option<Occurrence> {
    let index = match code {
        "02" => 0,
        "03" => 1,
        "04" => 2,
        "05" => 3,
        "06" => 4,
        "07" => 5,
        "08" => 6,
        "09" => 7,
        "10" => 8,
        "11" => 9,
        "12" => 10,
        "13" => 11,
        "14" => 12,
        "15" => 13,
        "16" => 14,
        "17" => 15,
        "18" => 16,
        "19" => 17,
        "20" => 18,
        "21" => 19,
        "23" => 20,
        "24" => 21,
        "25" => 22,
        "26" => 23,
        "27" => 24,
        "28" => 25,
        "29" => 26,
        "30" => 27,
        "32" => 28,
        "33" => 29,
        "34" => 30,
        "35" => 31,
        "36" => 32,
        "37" => 33,
        "38" => 34,
        "39" => 35,
        "40" => 36,
        "41" => 37,
        "42" => 38,
        "43" => 39,
        "44" => 40,
        "45" => 41,
        "46" => 42,
        "47" => 43,
        "48" => 44,
        "51" => 45,
        "52" => 46,
        "53" => 47,
        "54" => 48,
        "55" => 49,
        "56" => 50,
        "57" => 51,
        "59" => 52,
        "60" => 53,
        "61" => 54,
        "62" => 55,
        "63" => 56,
        "64" => 57,
        "65" => 58,
        "69" => 59,
        "71" => 60,
        "72" => 61,
        "73" => 62,
        "76" => 63,
        _ => return None,
    };
    OCCURRENCES.get(index).copied()
}

/// Whether an occurrence code reports a payment.
#[must_use]
pub fn is_settlement(code: &str) -> bool {
    SETTLED.contains(&code)
}
