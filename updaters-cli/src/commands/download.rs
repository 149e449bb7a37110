//! Download command implementation

use super::current_version;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use updaters_core::install::{download_to_path, is_up_to_date, make_executable};
use updaters_core::{lookup, App, GithubClient, LookupError};

/// Download the latest AppImage of an application and make it executable
pub async fn download(
    client: &GithubClient,
    app: App,
    output_dir: &Path,
    current: Option<String>,
    force: bool,
) -> Result<()> {
    let release = lookup(client, app)
        .await
        .with_context(|| format!("Failed to look up latest {} release", app))?;
    tracing::info!("Latest version found: {}", release.tag_name);

    if !force {
        let installed = current_version(app, current).await?;
        if is_up_to_date(&installed, &release.tag_name) {
            println!("{} is up to date ({})", app, installed);
            return Ok(());
        }
        tracing::info!("Updating {} from {} to {}", app, installed, release.tag_name);
    }

    let asset_name = app.asset_name(&release.tag_name);
    if release.app_image_url.is_empty() {
        return Err(LookupError::AssetNotFound(asset_name).into());
    }

    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    let destination = output_dir.join(&asset_name);

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {bytes:>10}/{total_bytes:10} {msg}")?
            .progress_chars("##-"),
    );
    pb.set_message(asset_name.clone());

    let written = download_to_path(
        client.http(),
        &release.app_image_url,
        &destination,
        |downloaded, total| {
            if let Some(total) = total {
                pb.set_length(total);
            }
            pb.set_position(downloaded);
        },
    )
    .await
    .with_context(|| format!("Failed to download {}", release.app_image_url))?;
    pb.finish_and_clear();

    make_executable(&destination)
        .await
        .with_context(|| format!("Failed to make {} executable", destination.display()))?;

    tracing::debug!("Wrote {} bytes", written);
    println!(
        "Downloaded {} {} to {}",
        app,
        release.tag_name,
        destination.display()
    );

    Ok(())
}
