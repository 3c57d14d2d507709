//! Aggregate config to token list conversion

use super::types::{Token, TokenListDocument, Version, CHAIN_ID, KEYWORDS, LIST_NAME};
use crate::aggregate::{AggregateConfig, MissingField};
use crate::error::{GenerateError, Result};
use chrono::{DateTime, SecondsFormat, Utc};

/// Display name of a symbol's synthetic market
pub fn token_name(symbol: &str) -> String {
    format!("{} synthetic market", symbol)
}

/// Build the token list manifest
///
/// Emits one token per aggregate entry in input order. The first entry that
/// lacks a required key aborts the whole conversion. `minor` is always bumped
/// by one relative to `base`; a `minor` that cannot be bumped is an error.
pub fn build_token_list(
    aggregate: &AggregateConfig,
    base: Version,
    generated_at: DateTime<Utc>,
) -> Result<TokenListDocument> {
    let version = base
        .bump_minor()
        .ok_or(GenerateError::VersionOverflow(base))?;

    let tokens = aggregate
        .symbols
        .iter()
        .enumerate()
        .map(|(i, entry)| -> std::result::Result<Token, MissingField> {
            let symbol = entry.require_symbol(i)?;
            Ok(Token {
                address: entry.require_token_addr(i)?.to_string(),
                chain_id: CHAIN_ID,
                decimals: entry.require_precision(i)?,
                symbol: symbol.to_string(),
                name: token_name(symbol),
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(TokenListDocument {
        name: LIST_NAME.to_string(),
        timestamp: format_timestamp(generated_at),
        version,
        keywords: KEYWORDS.iter().map(|k| k.to_string()).collect(),
        tokens,
    })
}

/// ISO-8601 with microseconds and an explicit `+00:00` offset
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, false)
}
