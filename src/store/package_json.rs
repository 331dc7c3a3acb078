//! npm package manifest (`package.json`) version updates.

use std::path::Path;

use crate::error::StoreError;
use crate::version::ReleaseVersion;

use super::chart::line_pattern;

/// Rewrite the top-level `"version"` of a package manifest.
///
/// Only a version equal to `base`, or `base` with any `-suffix`, is replaced.
/// Returns `None` when the manifest carries something else. The manifest is
/// parsed to validate it, but only the version value is edited in the text.
pub fn rewrite_package_json(
    path: &Path,
    content: &str,
    base: &ReleaseVersion,
    next: &ReleaseVersion,
) -> Result<Option<String>, StoreError> {
    let json: serde_json::Value =
        serde_json::from_str(content).map_err(|e| StoreError::InvalidJson {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let carries_base = json
        .get("version")
        .and_then(|v| v.as_str())
        .is_some_and(|current| matches_base(current, base));

    if !carries_base {
        return Ok(None);
    }

    let escaped = regex_lite::escape(&base.to_string());
    let version_re = line_pattern(&format!(
        r#"("version"\s*:\s*")v?{escaped}(?:-[^"]*)?(")"#
    ))?;

    if !version_re.is_match(content) {
        return Ok(None);
    }
    Ok(Some(
        version_re
            .replacen(content, 1, format!("${{1}}{next}${{2}}").as_str())
            .into_owned(),
    ))
}

fn matches_base(raw: &str, base: &ReleaseVersion) -> bool {
    let raw = raw.strip_prefix('v').unwrap_or(raw);
    let base = base.to_string();
    match raw.strip_prefix(base.as_str()) {
        Some(rest) => rest.is_empty() || rest.starts_with('-'),
        None => false,
    }
}
