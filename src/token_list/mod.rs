//! Token list manifest generation
//!
//! Converts the aggregate symbol config into the `all.*.json` token list
//! consumed by the UI and indexers:
//! - one token per symbol, chain id fixed to BSC testnet
//! - version carried over from the previous manifest and minor-bumped

mod builder;
mod generate;
mod types;
mod version;

pub use builder::{build_token_list, format_timestamp, token_name};
pub use generate::{generate_token_list, TokenListJob, TokenListReport};
pub use types::{
    Token, TokenListDocument, Version, CHAIN_ID, DEFAULT_TOKEN_LIST_PATH, KEYWORDS, LIST_NAME,
};
pub use version::{
    read_prior_version, resolve_version, RequestedVersion, ResolvedVersion, VersionSource,
};
