//! Issuer abstraction.
//!
//! Each issuing bank contributes its three record layouts and its code
//! tables. The decoder is generic over the issuer and never names a bank.

use crate::record::Record;
use retorno_core::{Layout, Occurrence, RecordKind, SettlementChannel};
use std::fmt;

/// A trailer that declares how many detail records the file carries.
pub trait DetailCount {
    /// The declared count, or `None` if it did not decode.
    fn declared_details(&self) -> Option<u64>;
}

/// A bank issuing CNAB400 retorno files.
pub trait Issuer: Copy + fmt::Debug + PartialEq + Default + Send + Sync + 'static {
    /// Three-digit bank code as it appears in the header (`"341"`).
    const CODE: &'static str;
    /// Bank name.
    const NAME: &'static str;

    /// Header record type.
    type Header: Record;
    /// Detail record type.
    type Detail: Record;
    /// Trailer record type.
    type Trailer: Record + DetailCount;

    /// Layout used for a record kind, if the issuer defines one.
    #[must_use]
    fn layout(kind: RecordKind) -> Option<Layout> {
        match kind {
            RecordKind::Header => Some(<Self::Header as Record>::LAYOUT),
            RecordKind::Detail => Some(<Self::Detail as Record>::LAYOUT),
            RecordKind::Trailer => Some(<Self::Trailer as Record>::LAYOUT),
            RecordKind::Unknown => None,
        }
    }

    /// Look up a settlement channel code.
    fn settlement(code: &str) -> Option<SettlementChannel>;

    /// Look up an occurrence code.
    fn occurrence(code: &str) -> Option<Occurrence>;
}
