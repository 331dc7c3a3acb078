//! Version parsing and bumping.

pub mod bump;
pub mod release;

pub use bump::{BumpKind, bump, bump_str};
pub use release::ReleaseVersion;
