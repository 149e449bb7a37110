//! CLI command implementations

mod check;
mod download;
mod latest;

pub use check::check;
pub use download::download;
pub use latest::latest;

use anyhow::{Context, Result};
use updaters_core::{install, App};

/// Installed version from `--current`, or probed from the app's binary
async fn current_version(app: App, current: Option<String>) -> Result<String> {
    match current {
        Some(version) => Ok(version),
        None => install::installed_version(app)
            .await
            .with_context(|| format!("Is {} installed? Pass --current to skip probing", app)),
    }
}
