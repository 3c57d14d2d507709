//! K-line config generation run

use super::builder::build_kline_config;
use super::types::{is_excluded, KlineConfigDocument, PriorKlineConfig};
use crate::aggregate::AggregateConfig;
use crate::document::{load_json, load_prior, write_json};
use crate::error::Result;
use std::path::PathBuf;

/// Parameters of one k-line config run
#[derive(Debug, Clone)]
pub struct KlineJob {
    /// Aggregate config to read
    pub input: PathBuf,
    /// K-line config to merge from and overwrite
    pub output: PathBuf,
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct KlineReport {
    /// Whether an existing config was merged
    pub merged_prior: bool,
    /// Aggregate symbols left out by the exclusion set
    pub excluded: usize,
    pub document: KlineConfigDocument,
}

/// Merge the aggregate config into the k-line config and write it
pub fn generate_kline_config(job: &KlineJob) -> Result<KlineReport> {
    let aggregate: AggregateConfig = load_json(&job.input)?;

    let prior: Option<PriorKlineConfig> = if job.output.exists() {
        load_prior(&job.output)
    } else {
        tracing::info!(path = %job.output.display(), "No existing k-line config, generating it");
        None
    };

    let document = build_kline_config(&aggregate, prior.as_ref())?;
    write_json(&job.output, &document)?;

    let excluded = aggregate
        .symbols
        .iter()
        .filter(|e| e.symbol.as_deref().is_some_and(is_excluded))
        .count();

    tracing::info!(
        output = %job.output.display(),
        symbols = document.symbols.len(),
        excluded,
        "Generated k-line config"
    );

    Ok(KlineReport {
        merged_prior: prior.is_some(),
        excluded,
        document,
    })
}
