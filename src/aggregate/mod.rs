//! Aggregate symbol config
//!
//! The `aggr.*.json` file is the source of truth for tradable symbols and
//! their chain metadata. Both generators read it.

mod types;

pub use types::{AggregateConfig, MissingField, SymbolEntry};

/// Default location of the testnet aggregate config
pub const DEFAULT_AGGREGATE_PATH: &str = "oracle/aggr.testnet.json";
