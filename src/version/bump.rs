//! Version transitions for stable releases and the release-candidate track.

use std::fmt;
use std::str::FromStr;

use crate::error::VersionError;

use super::release::ReleaseVersion;

/// Requested kind of version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BumpKind {
    #[default]
    Patch,
    Minor,
    Major,
    Rc,
    PatchRc,
    MinorRc,
    MajorRc,
}

impl BumpKind {
    pub const ALL: [BumpKind; 7] = [
        BumpKind::Patch,
        BumpKind::Minor,
        BumpKind::Major,
        BumpKind::Rc,
        BumpKind::PatchRc,
        BumpKind::MinorRc,
        BumpKind::MajorRc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Patch => "patch",
            BumpKind::Minor => "minor",
            BumpKind::Major => "major",
            BumpKind::Rc => "rc",
            BumpKind::PatchRc => "patch-rc",
            BumpKind::MinorRc => "minor-rc",
            BumpKind::MajorRc => "major-rc",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpKind {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        BumpKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| VersionError::InvalidBumpKind(s.to_string()))
    }
}

/// Compute the version that follows `current` for the given bump kind.
///
/// - `patch`/`minor`/`major` bump a stable version, but finalize a release
///   candidate: `0.39.1-rc.2` becomes `0.39.1`, whatever the kind.
/// - `rc` advances an open candidate (`rc.N` -> `rc.N+1`) or opens `rc.1`
///   on the next patch of a stable version.
/// - `patch-rc`/`minor-rc`/`major-rc` always start `rc.1` on the bumped
///   base, discarding any open candidate.
///
/// Fails only with `VersionError::Overflow` when the incremented component
/// is already `u64::MAX`.
pub fn bump(current: ReleaseVersion, kind: BumpKind) -> Result<ReleaseVersion, VersionError> {
    let ReleaseVersion {
        major,
        minor,
        patch,
        rc,
    } = current;

    let next = |n: u64| {
        n.checked_add(1).ok_or_else(|| VersionError::Overflow {
            version: current.to_string(),
            kind: kind.as_str(),
        })
    };

    let version = match (kind, rc) {
        (BumpKind::Patch | BumpKind::Minor | BumpKind::Major, Some(_)) => current.base(),
        (BumpKind::Patch, None) => ReleaseVersion::new(major, minor, next(patch)?),
        (BumpKind::Minor, None) => ReleaseVersion::new(major, next(minor)?, 0),
        (BumpKind::Major, None) => ReleaseVersion::new(next(major)?, 0, 0),
        (BumpKind::Rc, Some(n)) => ReleaseVersion::candidate(major, minor, patch, next(n)?),
        (BumpKind::Rc | BumpKind::PatchRc, _) => {
            ReleaseVersion::candidate(major, minor, next(patch)?, 1)
        }
        (BumpKind::MinorRc, _) => ReleaseVersion::candidate(major, next(minor)?, 0, 1),
        (BumpKind::MajorRc, _) => ReleaseVersion::candidate(next(major)?, 0, 0, 1),
    };
    Ok(version)
}

/// Parse `current` and apply `kind` in one step.
pub fn bump_str(current: &str, kind: BumpKind) -> Result<ReleaseVersion, VersionError> {
    bump(ReleaseVersion::parse(current)?, kind)
}
