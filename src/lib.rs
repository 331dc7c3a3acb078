//! weavegitops tooling - release version management for a Helm-chart-packaged project.
//!
//! # Overview
//!
//! The chart manifest is the source of truth for the release version. A bump
//! computes the next version (stable or release candidate), rewrites the chart
//! manifest, chart values and npm package manifest, and reports the new
//! version to GitHub Actions.

pub mod ci;
pub mod error;
pub mod release;
pub mod store;
pub mod version;

// Re-export commonly used types
pub use error::{CiError, ReleaseError, StoreError, VersionError};
pub use release::{BumpConfig, BumpOutcome, run_bump};
pub use version::{BumpKind, ReleaseVersion, bump};
