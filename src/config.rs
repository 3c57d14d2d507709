//! Configuration types for hertz-listgen
//!
//! Every section is optional; command-line flags override the file.

use crate::aggregate::DEFAULT_AGGREGATE_PATH;
use crate::kline::DEFAULT_KLINE_PATH;
use crate::telemetry::LogFormat;
use crate::token_list::DEFAULT_TOKEN_LIST_PATH;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default location of the config file
pub const DEFAULT_CONFIG_PATH: &str = "hertz-listgen.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Default file locations
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Aggregate symbol config read by both generators
    #[serde(default = "default_aggregate")]
    pub aggregate: PathBuf,
    /// Token list manifest
    #[serde(default = "default_token_list")]
    pub token_list: PathBuf,
    /// K-line config
    #[serde(default = "default_kline")]
    pub kline: PathBuf,
}

fn default_aggregate() -> PathBuf {
    PathBuf::from(DEFAULT_AGGREGATE_PATH)
}
fn default_token_list() -> PathBuf {
    PathBuf::from(DEFAULT_TOKEN_LIST_PATH)
}
fn default_kline() -> PathBuf {
    PathBuf::from(DEFAULT_KLINE_PATH)
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            aggregate: default_aggregate(),
            token_list: default_token_list(),
            kline: default_kline(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file if present, otherwise use defaults
    ///
    /// A file that exists but cannot be parsed is reported on stderr and
    /// ignored; logging is not initialised yet at this point.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        Self::load(path).unwrap_or_else(|e| {
            eprintln!("Warning: Could not load config from {}: {}", path.display(), e);
            eprintln!("Using default configuration");
            Self::default()
        })
    }
}
