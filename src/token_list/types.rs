//! Token list types

use serde::{Deserialize, Serialize};
use std::fmt;

/// BSC testnet chain id
pub const CHAIN_ID: u64 = 97;

/// List name written at the top of the manifest
pub const LIST_NAME: &str = "HertzFlow";

/// Keywords attached to every generated list
pub const KEYWORDS: [&str; 3] = ["HertzFlow", "default", "list"];

/// Default output path for the token list
pub const DEFAULT_TOKEN_LIST_PATH: &str = "all.testnet.json";

/// Semantic version of the token list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Same version with `minor` incremented by one, `None` on overflow
    pub fn bump_minor(self) -> Option<Self> {
        Some(Self {
            minor: self.minor.checked_add(1)?,
            ..self
        })
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// On-chain token metadata for one synthetic market
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub address: String,
    pub chain_id: u64,
    pub decimals: u32,
    pub symbol: String,
    pub name: String,
}

/// Token list manifest (`all.*.json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenListDocument {
    pub name: String,
    pub timestamp: String,
    pub version: Version,
    pub keywords: Vec<String>,
    pub tokens: Vec<Token>,
}
