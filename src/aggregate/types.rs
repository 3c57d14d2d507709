//! Aggregate config types

use serde::Deserialize;
use thiserror::Error;

/// Root of an `aggr.*.json` file
///
/// Only the `symbols` list is read; oracle settings and other sections are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AggregateConfig {
    #[serde(default)]
    pub symbols: Vec<SymbolEntry>,
}

/// One tradable symbol in the aggregate config
///
/// Fields are optional at parse time so that an absent key is reported per
/// entry by whichever generator needs it, rather than as a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SymbolEntry {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub bsc_token_addr: Option<String>,
    #[serde(default)]
    pub bsc_precision: Option<u32>,
}

/// A symbol entry lacks a key the generator requires
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("symbol entry #{index} is missing required field `{field}`")]
pub struct MissingField {
    /// Zero-based position in the `symbols` list
    pub index: usize,
    pub field: &'static str,
}

impl SymbolEntry {
    /// Symbol identifier, e.g. "BTC/USD"
    pub fn require_symbol(&self, index: usize) -> Result<&str, MissingField> {
        self.symbol
            .as_deref()
            .ok_or(MissingField { index, field: "symbol" })
    }

    /// BSC token contract address
    pub fn require_token_addr(&self, index: usize) -> Result<&str, MissingField> {
        self.bsc_token_addr.as_deref().ok_or(MissingField {
            index,
            field: "bsc_token_addr",
        })
    }

    /// BSC token decimals
    pub fn require_precision(&self, index: usize) -> Result<u32, MissingField> {
        self.bsc_precision.ok_or(MissingField {
            index,
            field: "bsc_precision",
        })
    }
}
