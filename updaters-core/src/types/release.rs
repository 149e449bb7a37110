//! GitHub release records

use super::app::App;
use serde::{Deserialize, Serialize};

/// A downloadable file attached to a release. Does not contain all fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// API URL of the asset (unused)
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub browser_download_url: String,
}

/// A published release as returned by the GitHub "latest release" endpoint.
///
/// `app_image_url` is never sent by GitHub; it is filled in by [`Release::resolve`]
/// and serialized back out to API clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub tag_name: String,
    #[serde(default)]
    pub app_image_url: String,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

impl Release {
    /// First asset whose name is exactly `name`
    pub fn find_asset(&self, name: &str) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.name == name)
    }

    /// Fill in `app_image_url` with the download URL of the app's AppImage.
    ///
    /// Leaves it untouched when the release carries no matching asset.
    pub fn resolve(&mut self, app: App) -> Option<&str> {
        let expected = app.asset_name(&self.tag_name);
        let url = self
            .find_asset(&expected)
            .map(|asset| asset.browser_download_url.clone());
        match url {
            Some(url) => {
                self.app_image_url = url;
                tracing::debug!(app = %app, asset = %expected, "Matched release asset");
                Some(&self.app_image_url)
            }
            None => {
                tracing::debug!(app = %app, asset = %expected, "No matching release asset");
                None
            }
        }
    }
}

/// Condensed view of a resolved release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub latest_version: String,
    pub download_url: String,
}

impl From<&Release> for VersionInfo {
    fn from(release: &Release) -> Self {
        Self {
            latest_version: release.tag_name.clone(),
            download_url: release.app_image_url.clone(),
        }
    }
}
