//! Server configuration read from the environment

use anyhow::{Context, Result};
use std::net::SocketAddr;
use updaters_core::types::GITHUB_API;

/// Bind address used when `UPDATERS_ADDR` is unset
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Runtime settings for the server
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub addr: SocketAddr,

    /// Base URL of the GitHub API
    pub github_api: String,

    /// Allowed CORS origins; `None` keeps the localhost defaults
    pub cors_origins: Option<CorsOrigins>,
}

/// Origins accepted by the CORS layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    /// Parse `*` or a comma-separated list of origins
    pub fn parse(value: &str) -> Self {
        if value.trim() == "*" {
            return Self::Any;
        }
        Self::List(
            value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

impl Config {
    /// Load configuration from `UPDATERS_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let addr = lookup("UPDATERS_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse()
            .with_context(|| format!("Invalid UPDATERS_ADDR: {}", addr))?;

        Ok(Self {
            addr,
            github_api: lookup("UPDATERS_GITHUB_API").unwrap_or_else(|| GITHUB_API.to_string()),
            cors_origins: lookup("UPDATERS_CORS_ORIGINS").map(|v| CorsOrigins::parse(&v)),
        })
    }
}
