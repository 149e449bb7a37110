//! Release lookup types

mod app;
mod release;

pub use app::{strip_version_prefix, App, GITHUB_API};
pub use release::{Asset, Release, VersionInfo};
