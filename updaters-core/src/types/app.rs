//! Supported applications

use crate::error::LookupError;
use std::fmt;
use std::str::FromStr;

/// Base URL of the GitHub REST API
pub const GITHUB_API: &str = "https://api.github.com";

/// An application whose releases can be looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum App {
    Zen,
    Teams,
}

/// GitHub repository (`owner/name`) publishing each application's releases
const REPOSITORIES: [(App, &str); 2] = [
    (App::Zen, "zen-browser/desktop"),
    (App::Teams, "IsmaelMartinez/teams-for-linux"),
];

impl App {
    /// Every supported application
    pub const ALL: [App; 2] = [App::Zen, App::Teams];

    /// Identifier used in query strings and on the command line
    pub fn name(self) -> &'static str {
        match self {
            App::Zen => "zen",
            App::Teams => "teams",
        }
    }

    /// GitHub repository the application is released from
    pub fn repository(self) -> &'static str {
        REPOSITORIES
            .iter()
            .find(|(app, _)| *app == self)
            .map(|(_, repo)| *repo)
            .unwrap_or_default()
    }

    /// Executable name used to probe the installed version
    pub fn binary(self) -> &'static str {
        match self {
            App::Zen => "zen",
            App::Teams => "teams-for-linux",
        }
    }

    /// Latest-release endpoint under the given API base
    pub fn latest_release_url(self, api_base: &str) -> String {
        format!(
            "{}/repos/{}/releases/latest",
            api_base.trim_end_matches('/'),
            self.repository()
        )
    }

    /// Latest-release endpoint on api.github.com
    pub fn release_url(self) -> String {
        self.latest_release_url(GITHUB_API)
    }

    /// File name of the AppImage asset published for the given release tag
    pub fn asset_name(self, tag: &str) -> String {
        match self {
            App::Zen => "zen-x86_64.AppImage".to_string(),
            App::Teams => format!("teams-for-linux-{}-AppImage", strip_version_prefix(tag)),
        }
    }
}

/// Remove a single leading `v` from a version tag
pub fn strip_version_prefix(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

impl FromStr for App {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        App::ALL
            .into_iter()
            .find(|app| app.name() == s)
            .ok_or_else(|| LookupError::UnsupportedApp(s.to_string()))
    }
}

impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
