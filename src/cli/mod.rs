//! CLI interface for hertz-listgen
//!
//! Provides subcommands for:
//! - `token-list`: Generate the token list manifest
//! - `kline`: Generate the k-line config
//! - `config`: Show the effective configuration

mod kline;
mod token_list;

pub use kline::KlineArgs;
pub use token_list::TokenListArgs;

use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::document::DocumentError;
use crate::error::GenerateError;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "hertz-listgen")]
#[command(about = "Generate token list and k-line config files from the aggregate symbol config")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Log level, overrides the config file
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate all.*.json from aggr.*.json
    #[command(alias = "all")]
    TokenList(TokenListArgs),
    /// Generate the k-line config from aggr.*.json
    Kline(KlineArgs),
    /// Show configuration
    Config,
}

/// Print the effective configuration
pub fn show_config(config: &Config) {
    println!("Current configuration:");
    println!(
        "  Logging: {} ({:?})",
        config.telemetry.log_level, config.telemetry.format
    );
    println!("  Aggregate: {}", config.paths.aggregate.display());
    println!("  Token list: {}", config.paths.token_list.display());
    println!("  K-line: {}", config.paths.kline.display());
}

/// One labelled line for a fatal error
///
/// Parse errors already carry their "JSON parsing error" label.
pub fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<GenerateError>() {
        Some(GenerateError::Document(DocumentError::Parse { .. })) => format!("❌ {}", err),
        _ => format!("❌ Error: {:#}", err),
    }
}
