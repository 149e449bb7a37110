//! Check command implementation

use super::current_version;
use anyhow::{Context, Result};
use updaters_core::install::is_up_to_date;
use updaters_core::{App, GithubClient, ReleaseSource};

/// Compare the installed version of an application against its latest release
pub async fn check(client: &GithubClient, app: App, current: Option<String>) -> Result<()> {
    let release = client
        .latest_release(app)
        .await
        .with_context(|| format!("Failed to look up latest {} release", app))?;
    tracing::info!("Latest version found: {}", release.tag_name);

    let installed = current_version(app, current).await?;
    tracing::info!("Installed version: {}", installed);

    if is_up_to_date(&installed, &release.tag_name) {
        println!("{} is up to date ({})", app, installed);
    } else {
        println!(
            "{} {} is available (installed: {})",
            app, release.tag_name, installed
        );
    }

    Ok(())
}
