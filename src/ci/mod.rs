//! GitHub Actions integration: step outputs and tag-ref detection.

pub mod output;
pub mod tag;

pub use output::{GITHUB_OUTPUT_ENV, append_output, github_output_path};
pub use tag::{GITHUB_REF_ENV, current_ref_is_release_tag, is_release_tag};
