//! File-based version store.
//!
//! The chart manifest (`charts/gitops-server/Chart.yaml`) is the source of
//! truth. A bump rewrites the chart manifest, the chart values file and the
//! npm package manifest wherever they still carry the current version.

pub mod chart;
pub mod files;
pub mod package_json;

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;
use crate::version::ReleaseVersion;

/// Chart directory relative to the project root.
pub const CHART_DIR: &str = "charts/gitops-server";

/// The kind of file carrying a copy of the release version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionFileKind {
    ChartManifest,
    ChartValues,
    PackageManifest,
}

impl fmt::Display for VersionFileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionFileKind::ChartManifest => write!(f, "Chart.yaml"),
            VersionFileKind::ChartValues => write!(f, "values.yaml"),
            VersionFileKind::PackageManifest => write!(f, "package.json"),
        }
    }
}

/// A version-carrying file within a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFile {
    pub path: PathBuf,
    pub kind: VersionFileKind,
}

/// Where each version-carrying file lives for a given project root.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    pub root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn chart_manifest(&self) -> PathBuf {
        self.root.join(CHART_DIR).join("Chart.yaml")
    }

    pub fn chart_values(&self) -> PathBuf {
        self.root.join(CHART_DIR).join("values.yaml")
    }

    pub fn package_manifest(&self) -> PathBuf {
        self.root.join("package.json")
    }

    /// All version files in update order.
    pub fn files(&self) -> [VersionFile; 3] {
        [
            VersionFile {
                path: self.chart_manifest(),
                kind: VersionFileKind::ChartManifest,
            },
            VersionFile {
                path: self.chart_values(),
                kind: VersionFileKind::ChartValues,
            },
            VersionFile {
                path: self.package_manifest(),
                kind: VersionFileKind::PackageManifest,
            },
        ]
    }

    /// Path relative to the project root, for display.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

/// Read the current version from the chart manifest.
pub fn read_current(layout: &ProjectLayout) -> Result<ReleaseVersion, StoreError> {
    let path = layout.chart_manifest();
    if !path.is_file() {
        return Err(StoreError::ChartNotFound(path));
    }

    let content = files::read_file(&path)?;
    let raw = chart::find_chart_version(&content)
        .ok_or_else(|| StoreError::VersionNotFound(path.clone()))?;

    let version = ReleaseVersion::parse(raw.strip_prefix('v').unwrap_or(raw))
        .map_err(|source| StoreError::InvalidVersion {
            path: path.clone(),
            source,
        })?;

    debug!(path = %path.display(), %version, "Read current version");
    Ok(version)
}

/// Rewrite every version file that still carries `current`'s base version.
///
/// The chart manifest must exist; values and package files are optional.
/// Returns the updated files, or `StoreError::NothingToUpdate` when none of
/// them matched.
pub fn write_version(
    layout: &ProjectLayout,
    current: &ReleaseVersion,
    next: &ReleaseVersion,
) -> Result<Vec<VersionFile>, StoreError> {
    let chart_path = layout.chart_manifest();
    if !chart_path.is_file() {
        return Err(StoreError::ChartNotFound(chart_path));
    }

    let base = current.base();
    let mut updated = Vec::new();

    for file in layout.files() {
        if !file.path.is_file() {
            debug!(path = %file.path.display(), "Skipping missing version file");
            continue;
        }
        if update_version_file(&file, &base, next)? {
            debug!(path = %file.path.display(), %next, "Updated version file");
            updated.push(file);
        } else {
            debug!(path = %file.path.display(), %base, "Version file does not carry current version");
        }
    }

    if updated.is_empty() {
        return Err(StoreError::NothingToUpdate(base.to_string()));
    }

    Ok(updated)
}

/// Update a single version file. Returns whether anything changed.
pub fn update_version_file(
    file: &VersionFile,
    base: &ReleaseVersion,
    next: &ReleaseVersion,
) -> Result<bool, StoreError> {
    let content = files::read_file(&file.path)?;

    let rewritten = match file.kind {
        VersionFileKind::ChartManifest => chart::rewrite_chart_manifest(&content, base, next)?,
        VersionFileKind::ChartValues => chart::rewrite_values(&content, base, next)?,
        VersionFileKind::PackageManifest => {
            package_json::rewrite_package_json(&file.path, &content, base, next)?
        }
    };

    match rewritten {
        Some(new_content) => {
            files::write_file(&file.path, &new_content)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn project(chart: &str) -> (tempfile::TempDir, ProjectLayout) {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path());
        fs::create_dir_all(dir.path().join(CHART_DIR)).unwrap();
        fs::write(layout.chart_manifest(), chart).unwrap();
        (dir, layout)
    }

    #[test]
    fn test_read_current_stable() {
        let (_dir, layout) = project(
            "apiVersion: v2\nname: weave-gitops\nversion: 1.2.3\nappVersion: \"v1.2.3\"\n",
        );
        assert_eq!(read_current(&layout).unwrap(), ReleaseVersion::new(1, 2, 3));
    }

    #[test]
    fn test_read_current_candidate_with_comment() {
        let (_dir, layout) = project(
            "version: 0.39.0-rc.2 # x-release-please\nappVersion: \"v0.39.0-rc.2\"\n",
        );
        assert_eq!(
            read_current(&layout).unwrap(),
            ReleaseVersion::candidate(0, 39, 0, 2)
        );
    }

    #[test]
    fn test_read_current_accepts_v_prefix() {
        let (_dir, layout) = project("version: v0.1.0\n");
        assert_eq!(read_current(&layout).unwrap(), ReleaseVersion::new(0, 1, 0));
    }

    #[test]
    fn test_read_current_missing_version_line() {
        let (_dir, layout) = project("name: x\n# no version\n");
        assert!(matches!(
            read_current(&layout),
            Err(StoreError::VersionNotFound(_))
        ));
    }

    #[test]
    fn test_read_current_invalid_version() {
        let (_dir, layout) = project("version: 1.2.3-beta.1\n");
        assert!(matches!(
            read_current(&layout),
            Err(StoreError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn test_read_current_without_chart() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path());
        let err = read_current(&layout).unwrap_err();
        assert!(matches!(
            &err,
            StoreError::ChartNotFound(path) if *path == layout.chart_manifest()
        ));
        assert_eq!(
            err.to_string(),
            format!("{} not found", layout.chart_manifest().display())
        );
    }

    #[test]
    fn test_store_errors_carry_full_chart_path() {
        let (_dir, layout) = project("name: x\n");
        assert!(matches!(
            read_current(&layout),
            Err(StoreError::VersionNotFound(path)) if path == layout.chart_manifest()
        ));

        std::fs::write(layout.chart_manifest(), "version: 01.2.3\n").unwrap();
        assert!(matches!(
            read_current(&layout),
            Err(StoreError::InvalidVersion { path, .. }) if path == layout.chart_manifest()
        ));

        std::fs::remove_file(layout.chart_manifest()).unwrap();
        let result = write_version(
            &layout,
            &ReleaseVersion::new(1, 2, 3),
            &ReleaseVersion::new(1, 2, 4),
        );
        assert!(matches!(
            result,
            Err(StoreError::ChartNotFound(path)) if path == layout.chart_manifest()
        ));
    }

    #[test]
    fn test_write_version_handles_crlf_chart() {
        let (_dir, layout) = project("version: 0.39.0\r\nappVersion: \"v0.39.0\"\r\n");
        let current = read_current(&layout).unwrap();
        let updated = write_version(&layout, &current, &ReleaseVersion::new(0, 39, 1)).unwrap();

        assert_eq!(updated.len(), 1);
        assert_eq!(
            fs::read_to_string(layout.chart_manifest()).unwrap(),
            "version: 0.39.1\r\nappVersion: \"v0.39.1\"\r\n"
        );
    }

    #[test]
    fn test_write_version_skips_missing_optional_files() {
        let (_dir, layout) = project("version: 0.39.0\nappVersion: \"v0.39.0\"\n");
        let updated = write_version(
            &layout,
            &ReleaseVersion::new(0, 39, 0),
            &ReleaseVersion::new(0, 39, 1),
        )
        .unwrap();

        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].kind, VersionFileKind::ChartManifest);
        let chart = fs::read_to_string(layout.chart_manifest()).unwrap();
        assert!(chart.contains("version: 0.39.1"));
        assert!(chart.contains("appVersion: \"v0.39.1\""));
    }

    #[test]
    fn test_write_version_nothing_to_update() {
        let (_dir, layout) = project("version: 0.50.0\nappVersion: \"v0.50.0\"\n");
        let result = write_version(
            &layout,
            &ReleaseVersion::new(0, 39, 0),
            &ReleaseVersion::new(0, 40, 0),
        );
        assert!(matches!(result, Err(StoreError::NothingToUpdate(v)) if v == "0.39.0"));
    }

    #[test]
    fn test_relative_path_display() {
        let layout = ProjectLayout::new("/work/project");
        assert_eq!(
            layout.relative(&layout.chart_values()),
            Path::new("charts/gitops-server/values.yaml")
        );
    }
}
