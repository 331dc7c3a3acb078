//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// A scratch project with the chart, values and package manifest layout.
pub struct TestProject {
    pub dir: tempfile::TempDir,
}

impl TestProject {
    /// Create an empty project in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self { dir }
    }

    /// Create a project whose files all carry `version`.
    pub fn with_version(version: &str) -> Self {
        let project = Self::new();
        project.write_chart(&format!(
            "version: {version}\nappVersion: \"v{version}\"\n"
        ));
        project.write_values(&format!("image:\n  tag: \"v{version}\"\n"));
        project.write_package_json(&format!("{{\"version\": \"{version}\"}}\n"));
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn chart_dir(&self) -> PathBuf {
        self.root().join("charts").join("gitops-server")
    }

    pub fn chart_path(&self) -> PathBuf {
        self.chart_dir().join("Chart.yaml")
    }

    pub fn values_path(&self) -> PathBuf {
        self.chart_dir().join("values.yaml")
    }

    pub fn package_path(&self) -> PathBuf {
        self.root().join("package.json")
    }

    pub fn write_chart(&self, content: &str) {
        fs::create_dir_all(self.chart_dir()).expect("Failed to create chart dir");
        fs::write(self.chart_path(), content).expect("Failed to write Chart.yaml");
    }

    pub fn write_values(&self, content: &str) {
        fs::create_dir_all(self.chart_dir()).expect("Failed to create chart dir");
        fs::write(self.values_path(), content).expect("Failed to write values.yaml");
    }

    pub fn write_package_json(&self, content: &str) {
        fs::write(self.package_path(), content).expect("Failed to write package.json");
    }

    pub fn chart(&self) -> String {
        read(&self.chart_path())
    }

    pub fn values(&self) -> String {
        read(&self.values_path())
    }

    pub fn package_json(&self) -> String {
        read(&self.package_path())
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e))
}
