//! Aggregate config to k-line config merge

use super::types::{
    default_kp, is_excluded, KlineConfigDocument, KlineSymbolConfig, PriorKlineConfig,
};
use crate::aggregate::{AggregateConfig, MissingField};
use serde_json::Value;
use std::collections::HashMap;

/// Map each previously configured symbol to its `kp`
///
/// A later duplicate wins.
fn kp_lookup(prior: Option<&PriorKlineConfig>) -> HashMap<&str, Value> {
    prior
        .map(|prior| prior.entries().collect())
        .unwrap_or_default()
}

/// Build the k-line config
///
/// Symbols come from the aggregate config in order, minus the exclusion set.
/// Each symbol keeps the `kp` it had in `prior`, or 0 if it is new.
pub fn build_kline_config(
    aggregate: &AggregateConfig,
    prior: Option<&PriorKlineConfig>,
) -> Result<KlineConfigDocument, MissingField> {
    let kp = kp_lookup(prior);
    let mut symbols = Vec::with_capacity(aggregate.symbols.len());

    for (i, entry) in aggregate.symbols.iter().enumerate() {
        let symbol = entry.require_symbol(i)?;

        if is_excluded(symbol) {
            tracing::info!(symbol, "Skipping excluded symbol");
            continue;
        }

        symbols.push(KlineSymbolConfig {
            symbol: symbol.to_string(),
            kp: kp.get(symbol).cloned().unwrap_or_else(default_kp),
        });
    }

    Ok(KlineConfigDocument { symbols })
}
