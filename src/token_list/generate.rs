//! Token list generation run

use super::builder::build_token_list;
use super::types::TokenListDocument;
use super::version::{resolve_version, RequestedVersion, ResolvedVersion};
use crate::aggregate::AggregateConfig;
use crate::document::{load_json, write_json};
use crate::error::Result;
use chrono::Utc;
use std::path::PathBuf;

/// Parameters of one token list run
#[derive(Debug, Clone)]
pub struct TokenListJob {
    /// Aggregate config to read
    pub input: PathBuf,
    /// Manifest to write (and read the prior version from)
    pub output: PathBuf,
    pub requested: RequestedVersion,
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct TokenListReport {
    /// Version the bump started from
    pub base: ResolvedVersion,
    pub document: TokenListDocument,
}

/// Resolve the version, convert the aggregate config and write the manifest
///
/// The output file is written only after the whole conversion succeeded.
pub fn generate_token_list(job: &TokenListJob) -> Result<TokenListReport> {
    let base = resolve_version(job.requested, &job.output);
    tracing::info!(version = %base.version, source = %base.source, "Resolved base version");

    let aggregate: AggregateConfig = load_json(&job.input)?;
    tracing::debug!(
        input = %job.input.display(),
        symbols = aggregate.symbols.len(),
        "Loaded aggregate config"
    );

    let document = build_token_list(&aggregate, base.version, Utc::now())?;
    write_json(&job.output, &document)?;

    tracing::info!(
        output = %job.output.display(),
        tokens = document.tokens.len(),
        version = %document.version,
        "Generated token list"
    );

    Ok(TokenListReport { base, document })
}
