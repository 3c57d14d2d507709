//! Token list command implementation

use crate::config::Config;
use crate::token_list::{
    generate_token_list, RequestedVersion, TokenListJob, TokenListReport, VersionSource,
};
use clap::Args;
use std::path::PathBuf;

/// Tokens listed in the summary
const SAMPLE_TOKENS: usize = 5;

#[derive(Args, Debug)]
pub struct TokenListArgs {
    /// Major version number
    #[arg(long)]
    pub version_major: Option<u64>,

    /// Minor version number (will be incremented by 1)
    #[arg(long)]
    pub version_minor: Option<u64>,

    /// Patch version number
    #[arg(long)]
    pub version_patch: Option<u64>,

    /// Input file path [default: oracle/aggr.testnet.json]
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output file path [default: all.testnet.json]
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl TokenListArgs {
    pub fn requested_version(&self) -> RequestedVersion {
        RequestedVersion {
            major: self.version_major,
            minor: self.version_minor,
            patch: self.version_patch,
        }
    }

    pub fn job(&self, config: &Config) -> TokenListJob {
        TokenListJob {
            input: self
                .input
                .clone()
                .unwrap_or_else(|| config.paths.aggregate.clone()),
            output: self
                .output
                .clone()
                .unwrap_or_else(|| config.paths.token_list.clone()),
            requested: self.requested_version(),
        }
    }

    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let job = self.job(config);
        let report = generate_token_list(&job)?;
        print_summary(&job, &report);
        Ok(())
    }
}

fn print_summary(job: &TokenListJob, report: &TokenListReport) {
    let base = report.base.version;
    match report.base.source {
        VersionSource::Prior => println!("📖 Read version from existing file: {}", base),
        VersionSource::Default => {
            println!("⚠️  No existing version found, using defaults: {}", base)
        }
        VersionSource::Explicit => println!("📌 Using provided version: {}", base),
    }

    let doc = &report.document;
    println!("✅ Successfully generated {}", job.output.display());
    println!("📊 Generated {} tokens", doc.tokens.len());
    println!("🔢 Version: {}", doc.version);
    println!("⏰ Timestamp: {}", doc.timestamp);
    println!("\n📋 Sample tokens:");
    for (i, token) in doc.tokens.iter().take(SAMPLE_TOKENS).enumerate() {
        println!("   {}. {}: {}", i + 1, token.symbol, token.name);
    }
    if doc.tokens.len() > SAMPLE_TOKENS {
        println!("   ... and {} more tokens", doc.tokens.len() - SAMPLE_TOKENS);
    }
}
