//! K-line config generation
//!
//! Keeps the k-line service's symbol list in sync with the aggregate config
//! while preserving each symbol's tuned `kp` coefficient.

mod builder;
mod generate;
mod types;

pub use builder::build_kline_config;
pub use generate::{generate_kline_config, KlineJob, KlineReport};
pub use types::{
    is_excluded, KlineConfigDocument, KlineSymbolConfig, PriorKlineConfig, EXCLUDED_SYMBOLS,
};

/// Default output path for the k-line config
pub const DEFAULT_KLINE_PATH: &str = "all.testnet.json";
