//! Release bump pipeline.
//!
//! Reads the current version from the chart, computes the next one, rewrites
//! the version files, and reports the result to the GitHub output file.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::ci::append_output;
use crate::error::ReleaseError;
use crate::store::{ProjectLayout, VersionFile, read_current, write_version};
use crate::version::{BumpKind, ReleaseVersion, bump};

/// Configuration for the bump command, derived from CLI flags and environment.
#[derive(Debug, Clone)]
pub struct BumpConfig {
    pub project_root: PathBuf,
    pub kind: BumpKind,
    pub github_output: Option<PathBuf>,
    pub dry_run: bool,
}

/// What a bump did.
#[derive(Debug, Clone)]
pub struct BumpOutcome {
    pub previous: ReleaseVersion,
    pub next: ReleaseVersion,
    pub kind: BumpKind,
    /// Updated files, relative to the project root. Empty on a dry run.
    pub updated: Vec<PathBuf>,
    pub wrote_output: bool,
    pub dry_run: bool,
}

impl BumpOutcome {
    /// One-line summary, e.g. `Bumped 0.39.0 -> 0.39.1 (patch); updated 3 file(s)`.
    pub fn summary(&self) -> String {
        if self.dry_run {
            format!(
                "Would bump {} -> {} ({}); no files written (dry run)",
                self.previous, self.next, self.kind
            )
        } else {
            format!(
                "Bumped {} -> {} ({}); updated {} file(s)",
                self.previous,
                self.next,
                self.kind,
                self.updated.len()
            )
        }
    }
}

/// Run the bump pipeline.
pub fn run_bump(config: &BumpConfig) -> Result<BumpOutcome, ReleaseError> {
    let layout = ProjectLayout::new(&config.project_root);

    let previous = read_current(&layout)?;
    let next = bump(previous, config.kind)?;
    info!(%previous, %next, kind = %config.kind, "Computed next version");

    if config.dry_run {
        debug!("Dry run: skipping file updates and GitHub output");
        return Ok(BumpOutcome {
            previous,
            next,
            kind: config.kind,
            updated: Vec::new(),
            wrote_output: false,
            dry_run: true,
        });
    }

    let updated: Vec<PathBuf> = write_version(&layout, &previous, &next)?
        .iter()
        .map(|VersionFile { path, .. }| layout.relative(path).to_path_buf())
        .collect();

    let wrote_output = match &config.github_output {
        Some(path) => {
            append_output(path, &next)?;
            true
        }
        None => false,
    };

    Ok(BumpOutcome {
        previous,
        next,
        kind: config.kind,
        updated,
        wrote_output,
        dry_run: false,
    })
}
