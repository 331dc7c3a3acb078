//! Release version representation: `X.Y.Z` or `X.Y.Z-rc.N`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::VersionError;

/// A release version, optionally a release candidate.
///
/// `rc` is `None` for a finalized release and `Some(n)` with `n >= 1` for the
/// n-th candidate of `major.minor.patch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReleaseVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub rc: Option<u64>,
}

impl ReleaseVersion {
    /// Create a stable version.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            rc: None,
        }
    }

    /// Create the `rc`-th release candidate of `major.minor.patch`.
    pub const fn candidate(major: u64, minor: u64, patch: u64, rc: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            rc: Some(rc),
        }
    }

    /// Parse `X.Y.Z` or `X.Y.Z-rc.N`.
    ///
    /// No other pre-release identifiers, build metadata, leading zeros, or
    /// `v` prefix are accepted. The candidate number must be at least 1.
    pub fn parse(raw: &str) -> Result<Self, VersionError> {
        let invalid = || VersionError::Parse(raw.to_string());

        let version = semver::Version::parse(raw).map_err(|_| invalid())?;
        if !version.build.is_empty() {
            return Err(invalid());
        }

        let rc = if version.pre.is_empty() {
            None
        } else {
            let n = version
                .pre
                .as_str()
                .strip_prefix("rc.")
                .and_then(parse_candidate_number)
                .ok_or_else(invalid)?;
            Some(n)
        };

        Ok(Self {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            rc,
        })
    }

    /// Render as `X.Y.Z` or `X.Y.Z-rc.N`.
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Whether this version is a release candidate.
    pub fn is_candidate(&self) -> bool {
        self.rc.is_some()
    }

    /// The stable `X.Y.Z` this version is (or will become once finalized).
    pub fn base(&self) -> Self {
        Self::new(self.major, self.minor, self.patch)
    }
}

fn parse_candidate_number(segment: &str) -> Option<u64> {
    if segment.starts_with('0') || !segment.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok().filter(|n| *n >= 1)
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(n) = self.rc {
            write!(f, "-rc.{}", n)?;
        }
        Ok(())
    }
}

impl FromStr for ReleaseVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ReleaseVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReleaseVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
