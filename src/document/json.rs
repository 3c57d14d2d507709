//! JSON loading and pretty writing
//!
//! Generated files are checked into version control, so the writer must be
//! byte-stable: 4-space indentation, struct field order, literal UTF-8 and no
//! trailing newline.

use super::DocumentError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Indentation used for every generated document
pub const INDENT: &[u8] = b"    ";

/// Load and deserialize a JSON document
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, DocumentError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DocumentError::NotFound(path.to_path_buf()),
        _ => DocumentError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    serde_json::from_str(&content).map_err(|e| DocumentError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a previously generated document, treating any failure as "no prior state"
pub fn load_prior<T: DeserializeOwned>(path: impl AsRef<Path>) -> Option<T> {
    let path = path.as_ref();
    match load_json(path) {
        Ok(doc) => Some(doc),
        Err(e) if e.is_not_found() => {
            tracing::debug!(path = %path.display(), "No prior output found");
            None
        }
        Err(e) => {
            tracing::warn!(path = %e.path().display(), error = %e, "Ignoring unreadable prior output");
            None
        }
    }
}

/// Serialize a document with the fixed output formatting
pub fn to_pretty_bytes<T: Serialize>(doc: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser)?;
    Ok(buf)
}

/// Write a document, replacing `path` atomically
///
/// The content goes to a temporary file next to the target and is renamed over
/// it only once fully flushed, so readers never observe a partial file.
pub fn write_json<T: Serialize>(path: impl AsRef<Path>, doc: &T) -> Result<(), DocumentError> {
    let path = path.as_ref();
    let bytes = to_pretty_bytes(doc).map_err(|e| DocumentError::Encode {
        path: path.to_path_buf(),
        source: e,
    })?;

    let write_err = |source: std::io::Error| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_err)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(&bytes).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote document");
    Ok(())
}
