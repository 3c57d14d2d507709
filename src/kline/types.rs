//! K-line config types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Symbols never published to the k-line service
pub static EXCLUDED_SYMBOLS: [&str; 4] = ["CRV/USD", "WETH/USD", "USDT/USD", "USDC/USD"];

/// True if `symbol` must be left out of the k-line config
pub fn is_excluded(symbol: &str) -> bool {
    EXCLUDED_SYMBOLS.contains(&symbol)
}

pub(crate) fn default_kp() -> Value {
    Value::from(0)
}

/// Per-symbol k-line settings
///
/// `kp` is owned by the k-line service and carried over verbatim between
/// regenerations, whatever JSON value it holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KlineSymbolConfig {
    pub symbol: String,
    #[serde(default = "default_kp")]
    pub kp: Value,
}

/// K-line config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KlineConfigDocument {
    pub symbols: Vec<KlineSymbolConfig>,
}

/// Existing k-line config used as merge source
///
/// Entries stay raw JSON so that one odd entry cannot discard the `kp` of
/// every other symbol.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriorKlineConfig {
    #[serde(default)]
    pub symbols: Vec<Value>,
}

impl PriorKlineConfig {
    /// `(symbol, kp)` pairs in file order
    ///
    /// Entries without a non-empty string `symbol` are skipped with a warning.
    /// A missing or null `kp` reads as 0.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Value)> + '_ {
        self.symbols.iter().enumerate().filter_map(|(i, entry)| {
            match entry.get("symbol").and_then(Value::as_str) {
                Some(symbol) if !symbol.is_empty() => {
                    let kp = match entry.get("kp") {
                        Some(Value::Null) | None => default_kp(),
                        Some(kp) => kp.clone(),
                    };
                    Some((symbol, kp))
                }
                _ => {
                    tracing::warn!(index = i, "Skipping prior k-line entry without symbol");
                    None
                }
            }
        })
    }
}
