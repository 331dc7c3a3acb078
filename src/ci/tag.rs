//! Release tag detection for CI refs.

pub const GITHUB_REF_ENV: &str = "GITHUB_REF";

const RELEASE_TAG_PREFIX: &str = "refs/tags/v";

/// Whether a git ref names a release tag (`refs/tags/v...`).
pub fn is_release_tag(git_ref: &str) -> bool {
    git_ref.starts_with(RELEASE_TAG_PREFIX)
}

/// Check `GITHUB_REF`; unset is treated as not a tag.
pub fn current_ref_is_release_tag() -> bool {
    std::env::var(GITHUB_REF_ENV)
        .map(|r| is_release_tag(&r))
        .unwrap_or(false)
}
