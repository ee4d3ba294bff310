//! Itaú CNAB400 retorno record layouts.
//!
//! Offsets are 0-based; the manual's 1-based positions are `offset + 1`
//! through `offset + length`.

use crate::cnab_record;
use crate::issuer::DetailCount;
use crate::itau::{occurrence, settlement};
use retorno_core::{Occurrence, SettlementChannel};

cnab_record! {
    /// File header (line 1).
    pub struct Header: Header, "itau.header" {
        /// Record type, `0`.
        tipo_registro: text(0, 1),
        /// Operation code, `2` for retorno.
        codigo_retorno: text(1, 1),
        /// Literal `RETORNO`.
        literal_retorno: text(2, 7),
        /// Service code, `01`.
        codigo_servico: text(9, 2),
        /// Literal `COBRANCA`.
        literal_servico: text(11, 15),
        /// Account-holding agency.
        agencia: text(26, 4),
        /// Account number.
        conta: text(32, 5),
        /// Account check digit.
        dac: text(37, 1),
        /// Company name.
        nome_empresa: text(46, 30),
        /// Bank code, `341`.
        codigo_banco: text(76, 3),
        /// Bank name.
        nome_banco: text(79, 15),
        /// File generation date.
        data_geracao: date(94, 6),
        /// Recording density.
        densidade: integer(100, 5),
        /// Density unit, `BPI`.
        unidade_densidade: text(105, 3),
        /// File sequence number.
        sequencial_arquivo: integer(108, 5),
        /// Credit date.
        data_credito: date(113, 6),
        /// Line sequence number.
        numero_sequencial: integer(394, 6),
    }
    fillers {
        zeros01: (30, 2),
        brancos01: (38, 8),
        brancos02: (119, 275),
    }
}

cnab_record! {
    /// One collection instrument event.
    pub struct Detail: Detail, "itau.detail" {
        /// Record type, `1`.
        tipo_registro: text(0, 1),
        /// Company registration type (`01` CPF, `02` CNPJ).
        codigo_inscricao: text(1, 2),
        /// Company CPF/CNPJ.
        numero_inscricao: text(3, 14),
        /// Account-holding agency.
        agencia: text(17, 4),
        /// Account number.
        conta: text(23, 5),
        /// Account check digit.
        dac: text(28, 1),
        /// Company's own identifier for the instrument.
        uso_empresa: text(37, 25),
        /// Nosso número.
        nosso_numero: text(62, 8),
        /// Wallet number.
        numero_carteira: text(82, 3),
        /// Nosso número as registered in the wallet.
        nosso_numero_carteira: text(85, 8),
        /// Nosso número check digit.
        dac_nosso_numero: text(93, 1),
        /// Wallet code.
        codigo_carteira: text(107, 1),
        /// Occurrence code.
        codigo_ocorrencia: text(108, 2),
        /// Occurrence date.
        data_ocorrencia: date(110, 6),
        /// Document number.
        numero_documento: text(116, 10),
        /// Nosso número confirmation.
        nosso_numero_confirmacao: text(126, 8),
        /// Due date.
        vencimento: date(146, 6),
        /// Face value.
        valor_titulo: amount(152, 13, 2),
        /// Collecting bank code.
        codigo_banco: text(165, 3),
        /// Collecting agency.
        agencia_cobradora: text(168, 4),
        /// Collecting agency check digit.
        dac_agencia_cobradora: text(172, 1),
        /// Instrument species.
        especie: text(173, 2),
        /// Collection tariff.
        tarifa_cobranca: amount(175, 13, 2),
        /// IOF collected.
        valor_iof: amount(214, 13, 2),
        /// Rebate granted.
        valor_abatimento: amount(227, 13, 2),
        /// Discount granted.
        valor_desconto: amount(240, 13, 2),
        /// Amount credited.
        valor_principal: amount(253, 13, 2),
        /// Late interest and penalty.
        juros_mora_multa: amount(266, 13, 2),
        /// Other credits.
        outros_creditos: amount(279, 13, 2),
        /// DDA boleto flag.
        boleto_dda: text(292, 1),
        /// Settlement credit date.
        data_credito: date(295, 6),
        /// Cancelled instruction code.
        instrucao_cancelada: text(301, 4),
        /// Payer name.
        nome_pagador: text(324, 30),
        /// Error or message codes.
        erros: text(377, 8),
        /// Settlement channel code.
        codigo_liquidacao: text(392, 2),
        /// Line sequence number.
        numero_sequencial: integer(394, 6),
    }
    fillers {
        zeros01: (21, 2),
        brancos01: (29, 8),
        brancos02: (70, 12),
        brancos03: (94, 13),
        brancos04: (134, 12),
        brancos05: (188, 26),
        brancos06: (293, 2),
        brancos07: (305, 6),
        zeros02: (311, 13),
        brancos08: (354, 23),
        brancos09: (385, 7),
    }
}

cnab_record! {
    /// File trailer (last line).
    pub struct Trailer: Trailer, "itau.trailer" {
        /// Record type, `9`.
        tipo_registro: text(0, 1),
        /// Operation code, `2`.
        codigo_retorno: text(1, 1),
        /// Service code, `01`.
        codigo_servico: text(2, 2),
        /// Bank code, `341`.
        codigo_banco: text(4, 3),
        /// Instruments in simple collection.
        qtde_titulos_simples: integer(17, 8),
        /// Total value in simple collection.
        valor_total_simples: amount(25, 14, 2),
        /// Bank notice for simple collection.
        aviso_bancario_simples: text(39, 8),
        /// Instruments in linked collection.
        qtde_titulos_vinculada: integer(57, 8),
        /// Total value in linked collection.
        valor_total_vinculada: amount(65, 14, 2),
        /// Bank notice for linked collection.
        aviso_bancario_vinculada: text(79, 8),
        /// Instruments in direct collection.
        qtde_titulos_direta: integer(177, 8),
        /// Total value in direct collection.
        valor_total_direta: amount(185, 14, 2),
        /// Bank notice for direct collection.
        aviso_bancario_direta: text(199, 8),
        /// File control number.
        controle_arquivo: integer(207, 5),
        /// Declared number of detail records.
        qtde_detalhes: integer(212, 8),
        /// Total value informed.
        valor_total_informado: amount(220, 14, 2),
        /// Line sequence number.
        numero_sequencial: integer(394, 6),
    }
    fillers {
        brancos01: (7, 10),
        brancos02: (47, 10),
        brancos03: (87, 90),
        brancos04: (234, 160),
    }
}

impl Detail {
    /// The settlement channel this instrument was paid through.
    #[must_use]
    pub fn settlement(&self) -> Option<SettlementChannel> {
        settlement::describe(&self.codigo_liquidacao)
    }

    /// The event this record reports.
    #[must_use]
    pub fn occurrence(&self) -> Option<Occurrence> {
        occurrence::describe(&self.codigo_ocorrencia)
    }

    /// Whether this record reports a payment.
    #[must_use]
    pub fn is_settlement(&self) -> bool {
        occurrence::is_settlement(&self.codigo_ocorrencia)
    }
}

impl DetailCount for Trailer {
    fn declared_details(&self) -> Option<u64> {
        self.qtde_detalhes
    }
}
