//! GitHub release API client

use super::ReleaseSource;
use crate::error::{LookupError, Result};
use crate::types::{App, Release};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// User agent sent to GitHub, which rejects anonymous requests without one
pub const USER_AGENT: &str = concat!("updaters/", env!("CARGO_PKG_VERSION"));

/// Fetches releases from the GitHub REST API.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    api_base: String,
}

impl GithubClient {
    /// Client for a GitHub-compatible API rooted at `api_base`
    pub fn with_api_base(api_base: impl Into<String>) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            api_base: api_base.into(),
        })
    }

    /// Underlying HTTP client, reused for asset downloads
    pub fn http(&self) -> &Client {
        &self.http
    }
}

#[async_trait]
impl ReleaseSource for GithubClient {
    async fn latest_release(&self, app: App) -> Result<Release> {
        let url = app.latest_release_url(&self.api_base);
        tracing::debug!(app = %app, %url, "Fetching latest release");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(LookupError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let release: Release = serde_json::from_str(&body)?;
        tracing::debug!(
            app = %app,
            tag = %release.tag_name,
            assets = release.assets.len(),
            "Fetched release"
        );
        Ok(release)
    }
}
