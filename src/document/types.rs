//! Document I/O types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or writing a JSON document
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The file does not exist
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),
    /// The file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON or does not match the expected shape
    #[error("JSON parsing error in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The document could not be serialized
    #[error("failed to encode document for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The output file could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DocumentError {
    /// Path the error refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound(path) => path,
            Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::Encode { path, .. }
            | Self::Write { path, .. } => path,
        }
    }

    /// True for the "file does not exist" case
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
