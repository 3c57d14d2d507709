//! Errors that abort a generator run

use crate::aggregate::MissingField;
use crate::document::DocumentError;
use crate::token_list::Version;
use thiserror::Error;

/// Fatal generator error
///
/// Any of these stops the run before the output file is touched.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Aggregate input or output file I/O failed
    #[error(transparent)]
    Document(#[from] DocumentError),
    /// A symbol entry lacks a required key
    #[error(transparent)]
    MissingField(#[from] MissingField),
    /// The minor version cannot be incremented
    #[error("version {0} cannot be bumped: minor is already at its maximum")]
    VersionOverflow(Version),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
