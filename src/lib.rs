//! hertz-listgen: generators for HertzFlow's derived symbol files
//!
//! This library provides the core components for:
//! - Loading the aggregate symbol config (`aggr.*.json`)
//! - Building the token list manifest with version continuity
//! - Building the k-line config while preserving per-symbol `kp`
//! - Stable, atomic JSON output
//! - CLI front end, configuration and logging

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod kline;
pub mod telemetry;
pub mod token_list;
