//! Application state

use anyhow::Result;
use std::sync::Arc;
use updaters_core::{GithubClient, ReleaseSource};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Where release metadata comes from; one client shared by all requests
    pub releases: Arc<dyn ReleaseSource>,
}

impl AppState {
    /// State backed by the GitHub API at `api_base`
    pub fn new(api_base: &str) -> Result<Self> {
        let client = GithubClient::with_api_base(api_base)?;
        Ok(Self::with_source(client))
    }

    /// State backed by an arbitrary release source
    pub fn with_source(source: impl ReleaseSource + 'static) -> Self {
        Self {
            releases: Arc::new(source),
        }
    }
}
