//! Error types for Updaters Core

use thiserror::Error;

/// Result type alias using LookupError
pub type Result<T> = std::result::Result<T, LookupError>;

/// Top-level error type for release lookups and AppImage installs
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Unsupported application: {0:?}")]
    UnsupportedApp(String),

    #[error("Malformed request: {0}")]
    InvalidRequest(String),

    #[error("Request to release API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Expected HTTP 200 but got {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Malformed release JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No asset named {0} in latest release")]
    AssetNotFound(String),

    #[error("Could not determine installed version: {0}")]
    VersionProbe(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LookupError {
    /// Whether the error was caused by the caller rather than the upstream API
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::UnsupportedApp(_) | Self::InvalidRequest(_))
    }
}
