//! Latest command implementation

use anyhow::{Context, Result};
use updaters_core::{lookup, App, GithubClient, VersionInfo};

/// Print the latest release of an application
pub async fn latest(client: &GithubClient, app: App, json: bool) -> Result<()> {
    let release = lookup(client, app)
        .await
        .with_context(|| format!("Failed to look up latest {} release", app))?;

    let info = VersionInfo::from(&release);

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Latest version: {}", info.latest_version);
        if info.download_url.is_empty() {
            println!(
                "Download:       no {} asset in this release",
                app.asset_name(&release.tag_name)
            );
        } else {
            println!("Download:       {}", info.download_url);
        }
    }

    Ok(())
}
