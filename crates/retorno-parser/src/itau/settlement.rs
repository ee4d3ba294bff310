//! Itaú settlement channel codes (CNAB400 note 28, "código de liquidação").

use retorno_core::{Availability, SettlementChannel};

use Availability::{Available, PendingClearance};

/// Every settlement channel Itaú reports, in manual order.
pub const CHANNELS: &[SettlementChannel] = &[
    SettlementChannel::new("AA", "CAIXA ELETRONICO BANCO ITAU", Available),
    SettlementChannel::new("AC", "PAGAMENTO EM CARTORIO AUTOMATIZADO", PendingClearance),
    SettlementChannel::new("AO", "ACERTO ONLINE", Available),
    SettlementChannel::new("BC", "BANCOS CORRESPONDENTES", Available),
    SettlementChannel::new("BF", "ITAU BANKFONE", Available),
    SettlementChannel::new("BL", "ITAU BANKLINE", Available),
    SettlementChannel::new(
        "B0",
        "OUTROS BANCOS - RECEBIMENTO OFF-LINE",
        PendingClearance,
    ),
    SettlementChannel::new(
        "B1",
        "OUTROS BANCOS - PELO CODIGO DE BARRAS",
        PendingClearance,
    ),
    SettlementChannel::new(
        "B2",
        "OUTROS BANCOS - PELA LINHA DIGITAVEL",
        PendingClearance,
    ),
    SettlementChannel::new(
        "B3",
        "OUTROS BANCOS - PELO AUTO ATENDIMENTO",
        PendingClearance,
    ),
    SettlementChannel::new(
        "B4",
        "OUTROS BANCOS - RECEBIMENTO EM CASA LOTERICA",
        PendingClearance,
    ),
    SettlementChannel::new("B5", "OUTROS BANCOS - CORRESPONDENTE", PendingClearance),
    SettlementChannel::new("B6", "OUTROS BANCOS - TELEFONE", PendingClearance),
    SettlementChannel::new("B7", "OUTROS BANCOS - ARQUIVO ELETRONICO", PendingClearance),
    SettlementChannel::new(
        "CC",
        "AGENCIA ITAU - COM CHEQUE DE OUTRO BANCO",
        PendingClearance,
    ),
    SettlementChannel::new("CI", "CORRESPONDENTE ITAU", Available),
    SettlementChannel::new("CK", "SISPAG - SISTEMA DE CONTAS A PAGAR ITAU", Available),
    SettlementChannel::new(
        "CP",
        "AGENCIA ITAU - POR DEBITO EM CONTA CORRENTE,
        CHEQUE ITAU OU DINHEIRO",
        Available,
    ),
    SettlementChannel::new("DG", "AGENCIA ITAU - CAPTURADO EM OFF-LINE", Available),
    SettlementChannel::new(
        "LC",
        "PAGAMENTO EM CARTORIO DE PROTESTO COM CHEQUE",
        PendingClearance,
    ),
    SettlementChannel::new(
        "Q0",
        "AGENDAMENTO - DEBITO AGENDADO PELO FORNECEDOR",
        Available,
    ),
    SettlementChannel::new("RA", "DIGITACAO - REALIMENTACAO AUTOMATICA", Available),
    SettlementChannel::new("ST", "PAGAMENTO VIA SELTEC", Available),
];

/// Look up a settlement channel by its two-character code.
///
/// ```
/// use retorno_core::Availability;
/// use retorno_parser::itau::settlement::describe;
///
/// let channel = describe("AA").unwrap();
/// assert_eq!(channel.description, "CAIXA ELETRONICO BANCO ITAU");
/// assert_eq!(channel.availability, Availability::Available);
/// assert!(describe("ZZ").is_none());
/// ```
#[must_use]
pub fn describe(code: &str) -> Option<SettlementChannel> {
    let index = match code {
        "AA" => 0,
        "AC" => 1,
        "AO" => 2,
        "BC" => 3,
        "BF" => 4,
        "BL" => 5,
        "B0" => 6,
        "B1" => 7,
        "B2" => 8,
        "B3" => 9,
        "B4" => 10,
        "B5" => 11,
        "B6" => 12,
        "B7" => 13,
        "CC" => 14,
        "CI" => 15,
        "CK" => 16,
        "CP" => 17,
        "DG" => 18,
        "LC" => 19,
        "Q0" => 20,
        "RA" => 21,
        "ST" => 22,
        _ => return None,
    };
    CHANNELS.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_known() {
        let channel = describe("AA").unwrap();
        assert_eq!(channel.description, "CAIXA ELETRONICO BANCO ITAU");
        assert_eq!(channel.availability, Available);

        assert_eq!(describe("B1").unwrap().availability, PendingClearance);
        assert_eq!(describe("ST").unwrap().description, "PAGAMENTO VIA SELTEC");
    }

    #[test]
    fn test_describe_unknown() {
        assert_eq!(describe("ZZ"), None);
        assert_eq!(describe(""), None);
        assert_eq!(describe("aa"), None);
        assert_eq!(describe("  "), None);
    }

    #[test]
    fn test_match_agrees_with_table() {
        for channel in CHANNELS {
            assert_eq!(describe(channel.code), Some(*channel), "{}", channel.code);
        }
    }
}
