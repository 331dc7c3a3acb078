//! Line-level rewriting of the chart manifest and values file.
//!
//! The YAML files are edited in place with anchored line patterns so that
//! comments (e.g. `# x-release-please`) and layout survive a bump.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::error::StoreError;
use crate::version::ReleaseVersion;

static CHART_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*version:[ \t]*([^\s#]+)").expect("Invalid regex")
});

/// Find the raw `version:` token of a chart manifest (possibly `v`-prefixed).
pub fn find_chart_version(content: &str) -> Option<&str> {
    CHART_VERSION_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Rewrite `version:` and `appVersion:` in a chart manifest.
///
/// `version` is written bare, `appVersion` keeps its quotes and gets a `v`
/// prefix. Returns `None` when neither field carries `base`.
pub fn rewrite_chart_manifest(
    content: &str,
    base: &ReleaseVersion,
    next: &ReleaseVersion,
) -> Result<Option<String>, StoreError> {
    let base = regex_lite::escape(&base.to_string());

    let version_re = line_pattern(&format!(
        r"(?m)^([ \t]*version:[ \t]*)v?{base}(?:-[^\s#]*)?([ \t]*(?:#[^\r\n]*)?\r?)$"
    ))?;
    let app_version_re = line_pattern(&format!(
        r#"(?m)^([ \t]*appVersion:[ \t]*")v?{base}(?:-[^"]*)?("[ \t]*(?:#[^\r\n]*)?\r?)$"#
    ))?;

    let mut text = content.to_string();
    let mut changed = false;

    if version_re.is_match(&text) {
        text = version_re
            .replacen(&text, 1, format!("${{1}}{next}${{2}}").as_str())
            .into_owned();
        changed = true;
    }
    if app_version_re.is_match(&text) {
        text = app_version_re
            .replacen(&text, 1, format!("${{1}}v{next}${{2}}").as_str())
            .into_owned();
        changed = true;
    }

    Ok(changed.then_some(text))
}

/// Rewrite the quoted image `tag:` in a values file to `"v<next>"`.
pub fn rewrite_values(
    content: &str,
    base: &ReleaseVersion,
    next: &ReleaseVersion,
) -> Result<Option<String>, StoreError> {
    let base = regex_lite::escape(&base.to_string());
    let tag_re = line_pattern(&format!(
        r#"(?m)^([ \t]*tag:[ \t]*")v?{base}(?:-[^"]*)?("[ \t]*(?:#[^\r\n]*)?\r?)$"#
    ))?;

    if !tag_re.is_match(content) {
        return Ok(None);
    }
    Ok(Some(
        tag_re
            .replacen(content, 1, format!("${{1}}v{next}${{2}}").as_str())
            .into_owned(),
    ))
}

pub(crate) fn line_pattern(pattern: &str) -> Result<Regex, StoreError> {
    Regex::new(pattern).map_err(StoreError::Pattern)
}
