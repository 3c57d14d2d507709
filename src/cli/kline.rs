//! K-line command implementation

use crate::config::Config;
use crate::kline::{generate_kline_config, KlineJob};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct KlineArgs {
    /// Input file path [default: oracle/aggr.testnet.json]
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output file path [default: all.testnet.json]
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl KlineArgs {
    pub fn job(&self, config: &Config) -> KlineJob {
        KlineJob {
            input: self
                .input
                .clone()
                .unwrap_or_else(|| config.paths.aggregate.clone()),
            output: self
                .output
                .clone()
                .unwrap_or_else(|| config.paths.kline.clone()),
        }
    }

    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let job = self.job(config);
        let report = generate_kline_config(&job)?;

        println!("✅ Successfully generated {}", job.output.display());
        println!(
            "📊 {} symbols, {} excluded, {}",
            report.document.symbols.len(),
            report.excluded,
            if report.merged_prior {
                "kp merged from existing file"
            } else {
                "no existing kp values"
            }
        );
        Ok(())
    }
}
