//! Error types for weavegitops tooling modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from version parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid version '{0}': expected X.Y.Z or X.Y.Z-rc.N")]
    Parse(String),

    #[error(
        "Unknown bump '{0}'. Use patch, minor, major, rc, patch-rc, minor-rc, or major-rc."
    )]
    InvalidBumpKind(String),

    #[error("Cannot apply {kind} bump to {version}: component would overflow")]
    Overflow { version: String, kind: &'static str },
}

/// Errors from the file-based version store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{} not found", .0.display())]
    ChartNotFound(PathBuf),

    #[error("Could not find version in {}", .0.display())]
    VersionNotFound(PathBuf),

    #[error("Invalid version in {}: {source}", .path.display())]
    InvalidVersion {
        path: PathBuf,
        #[source]
        source: VersionError,
    },

    #[error("Invalid JSON in {}: {reason}", .path.display())]
    InvalidJson { path: PathBuf, reason: String },

    #[error("Invalid version line pattern: {0}")]
    Pattern(#[source] regex_lite::Error),

    #[error("No files had version {0} to update (Chart, values, package.json)")]
    NothingToUpdate(String),

    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from CI integration.
#[derive(Error, Debug)]
pub enum CiError {
    #[error("Failed to write GitHub output file {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the release bump pipeline.
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Ci(#[from] CiError),
}
