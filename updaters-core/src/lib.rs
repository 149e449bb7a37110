//! Updaters Core Library
//!
//! Looks up the latest GitHub release of the supported desktop applications and
//! locates the AppImage asset to download. Shared by the HTTP server and the CLI.

pub mod error;
pub mod install;
pub mod source;
pub mod types;

pub use error::{LookupError, Result};
pub use source::{lookup, GithubClient, ReleaseSource};
pub use types::{App, Asset, Release, VersionInfo};
