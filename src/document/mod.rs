//! Document module
//!
//! Loading and writing of the JSON files the generators read and produce

mod json;
mod types;

pub use json::{load_json, load_prior, to_pretty_bytes, write_json, INDENT};
pub use types::DocumentError;
