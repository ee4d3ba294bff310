//! Entries of issuer code tables.
//!
//! Issuers publish static tables that give meaning to the short codes carried
//! in detail records. The tables themselves live with each issuer; these are
//! the shared entry types.

use serde::Serialize;
use std::fmt;

/// Whether funds from a settlement are immediately usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Availability {
    /// Funds are available on the credit date.
    Available,
    /// Funds depend on interbank clearing (cheques, other banks).
    PendingClearance,
}

impl Availability {
    /// The label used in bank manuals.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "DISPONIVEL",
            Self::PendingClearance => "A COMPENSAR",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How and where a collection instrument was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SettlementChannel {
    /// Two-character settlement code.
    pub code: &'static str,
    /// Human description of the channel.
    pub description: &'static str,
    /// Availability class of the credited funds.
    pub availability: Availability,
}

impl SettlementChannel {
    /// Create a table entry.
    #[must_use]
    pub const fn new(
        code: &'static str,
        description: &'static str,
        availability: Availability,
    ) -> Self {
        Self {
            code,
            description,
            availability,
        }
    }
}

impl fmt::Display for SettlementChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.description, self.availability)
    }
}

/// The event a detail record reports (entry confirmed, settled, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Occurrence {
    /// Two-digit occurrence code.
    pub code: &'static str,
    /// Human description of the event.
    pub description: &'static str,
}

impl Occurrence {
    /// Create a table entry.
    #[must_use]
    pub const fn new(code: &'static str, description: &'static str) -> Self {
        Self { code, description }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.description)
    }
}
