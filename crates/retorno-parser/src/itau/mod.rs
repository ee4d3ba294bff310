//! Banco Itaú (341).

pub mod layout;
pub mod occurrence;
pub mod settlement;

pub use layout::{Detail, Header, Trailer};

use crate::issuer::Issuer;
use retorno_core::{Occurrence, SettlementChannel};

/// The Itaú issuer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Itau;

impl Issuer for Itau {
    const CODE: &'static str = "341";
    const NAME: &'static str = "BANCO ITAU SA";

    type Header = Header;
    type Detail = Detail;
    type Trailer = Trailer;

    fn settlement(code: &str) -> Option<SettlementChannel> {
        settlement::describe(code)
    }

    fn occurrence(code: &str) -> Option<Occurrence> {
        occurrence::describe(code)
    }
}
