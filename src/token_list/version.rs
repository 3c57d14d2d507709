//! Version resolution for the token list
//!
//! With no version flags the previous manifest's version is reused (and then
//! bumped by the builder). Any flag makes the version explicit, so an explicit
//! `1.0.0` is not mistaken for "nothing requested".

use super::types::Version;
use crate::document::load_prior;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Version components requested on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestedVersion {
    pub major: Option<u64>,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
}

impl RequestedVersion {
    pub fn is_empty(&self) -> bool {
        self.major.is_none() && self.minor.is_none() && self.patch.is_none()
    }
}

/// Where the resolved version came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    /// Given on the command line
    Explicit,
    /// Read from the existing output file
    Prior,
    /// No flags and no usable prior output
    Default,
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => write!(f, "provided"),
            Self::Prior => write!(f, "existing file"),
            Self::Default => write!(f, "defaults"),
        }
    }
}

/// Base version handed to the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedVersion {
    pub version: Version,
    pub source: VersionSource,
}

/// Version object of a previously generated manifest; absent parts default
#[derive(Debug, Default, Deserialize)]
struct PriorVersion {
    major: Option<u64>,
    minor: Option<u64>,
    patch: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct PriorTokenList {
    #[serde(default)]
    version: Option<PriorVersion>,
}

fn fill_defaults(major: Option<u64>, minor: Option<u64>, patch: Option<u64>) -> Version {
    let d = Version::default();
    Version::new(
        major.unwrap_or(d.major),
        minor.unwrap_or(d.minor),
        patch.unwrap_or(d.patch),
    )
}

/// Read the version of an existing manifest at `path`
pub fn read_prior_version(path: impl AsRef<Path>) -> Option<Version> {
    let prior: PriorTokenList = load_prior(path)?;
    let v = prior.version.unwrap_or_default();
    Some(fill_defaults(v.major, v.minor, v.patch))
}

/// Decide the base version for this run
pub fn resolve_version(requested: RequestedVersion, prior_path: impl AsRef<Path>) -> ResolvedVersion {
    if !requested.is_empty() {
        return ResolvedVersion {
            version: fill_defaults(requested.major, requested.minor, requested.patch),
            source: VersionSource::Explicit,
        };
    }

    match read_prior_version(prior_path) {
        Some(version) => ResolvedVersion {
            version,
            source: VersionSource::Prior,
        },
        None => ResolvedVersion {
            version: Version::default(),
            source: VersionSource::Default,
        },
    }
}
