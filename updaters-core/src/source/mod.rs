//! Release sources
//!
//! A [`ReleaseSource`] answers "what is the latest release of this app?".

mod github;

pub use github::{GithubClient, USER_AGENT};

use crate::error::Result;
use crate::types::{App, Release};
use async_trait::async_trait;

/// Abstract provider of release metadata
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetch the latest published release of `app`
    async fn latest_release(&self, app: App) -> Result<Release>;
}

/// Fetch the latest release of `app` and fill in its AppImage download URL
pub async fn lookup(source: &dyn ReleaseSource, app: App) -> Result<Release> {
    let mut release = source.latest_release(app).await?;
    release.resolve(app);
    Ok(release)
}
