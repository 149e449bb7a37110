//! Installing AppImages from a resolved release

use crate::error::{LookupError, Result};
use crate::types::{strip_version_prefix, App};
use reqwest::Client;
use std::path::Path;
use tempfile::NamedTempFile;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Stream `url` into `destination`, reporting `(downloaded, total)` after each chunk.
///
/// The body is staged in a temporary file beside `destination` and only moved
/// into place once the transfer completes, so a failed download leaves any
/// existing file untouched. Returns the number of bytes written.
pub async fn download_to_path<F>(
    client: &Client,
    url: &str,
    destination: &Path,
    mut on_progress: F,
) -> Result<u64>
where
    F: FnMut(u64, Option<u64>),
{
    tracing::info!(%url, destination = %destination.display(), "Downloading asset");

    let mut response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(LookupError::UpstreamStatus {
            status: status.as_u16(),
            body,
        });
    }

    let total = response.content_length();
    let staging_dir = destination
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    // Removed on drop unless persisted
    let staged = NamedTempFile::new_in(staging_dir)?;
    let mut file = File::from_std(staged.reopen()?);
    let mut downloaded: u64 = 0;
    on_progress(downloaded, total);

    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
        downloaded = downloaded.saturating_add(chunk.len() as u64);
        on_progress(downloaded, total);
    }

    file.flush().await?;
    drop(file);
    staged.persist(destination).map_err(|e| e.error)?;
    Ok(downloaded)
}

/// Mark a downloaded AppImage as executable (mode 0755)
#[cfg(unix)]
pub async fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).await?;
    Ok(())
}

#[cfg(not(unix))]
pub async fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Version reported by the installed binary's `--version` output.
///
/// The version is the last whitespace-separated token, e.g. `1.0.2-b.5` from
/// `Mozilla Zen 1.0.2-b.5`.
pub async fn installed_version(app: App) -> Result<String> {
    let output = Command::new(app.binary())
        .arg("--version")
        .output()
        .await
        .map_err(|e| LookupError::VersionProbe(format!("{}: {}", app.binary(), e)))?;

    if !output.status.success() {
        return Err(LookupError::VersionProbe(format!(
            "{} --version exited with {}",
            app.binary(),
            output.status
        )));
    }

    parse_version_output(&String::from_utf8_lossy(&output.stdout)).ok_or_else(|| {
        LookupError::VersionProbe(format!("{} --version printed nothing", app.binary()))
    })
}

/// Extract the version token from `--version` output
pub fn parse_version_output(output: &str) -> Option<String> {
    output
        .lines()
        .find(|line| !line.trim().is_empty())
        .and_then(|line| line.split_whitespace().last())
        .map(str::to_string)
}

/// Whether `installed` matches the `latest` release tag, ignoring a leading `v`
pub fn is_up_to_date(installed: &str, latest: &str) -> bool {
    strip_version_prefix(installed.trim()) == strip_version_prefix(latest.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_output() {
        assert_eq!(
            parse_version_output("Mozilla Zen 1.0.2-b.5\n"),
            Some("1.0.2-b.5".to_string())
        );
        assert_eq!(
            parse_version_output("\n2.0.0\n"),
            Some("2.0.0".to_string())
        );
        assert_eq!(parse_version_output("   \n"), None);
    }

    #[test]
    fn test_is_up_to_date() {
        assert!(is_up_to_date("1.2.3", "v1.2.3"));
        assert!(is_up_to_date("v1.2.3\n", "1.2.3"));
        assert!(!is_up_to_date("1.2.2", "v1.2.3"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_make_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zen-x86_64.AppImage");
        tokio::fs::write(&path, b"#!/bin/sh\n").await.unwrap();

        make_executable(&path).await.unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
