//! Append step outputs to the file named by `GITHUB_OUTPUT`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CiError;
use crate::version::ReleaseVersion;

pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Output file from the environment, if set and non-empty.
pub fn github_output_path() -> Option<PathBuf> {
    std::env::var_os(GITHUB_OUTPUT_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Append `version=<version>` to the output file, creating it if needed.
pub fn append_output(path: &Path, version: &ReleaseVersion) -> Result<(), CiError> {
    let write_err = |source| CiError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write_err)?;
    writeln!(file, "version={}", version).map_err(write_err)?;

    debug!(path = %path.display(), %version, "Appended version to GitHub output");
    Ok(())
}
