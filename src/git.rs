//! Git subprocess helpers scoped to a repository path

use anyhow::Result;
use std::path::Path;
use std::process::Command;

/// Get the `origin` remote URL of a repository
///
/// Returns `None` when the path is not a git repository or no `origin`
/// remote is configured.
pub fn remote_origin_url(repo_path: &Path) -> Result<Option<String>> {
    let output = Command::new("git")
        .arg("remote")
        .arg("get-url")
        .arg("origin")
        .current_dir(repo_path)
        .output();

    if let Ok(output) = output
        && output.status.success()
    {
        let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !url.is_empty() {
            return Ok(Some(url));
        }
    }

    Ok(None)
}

/// Read a single value from the repository's git configuration
pub fn config_value(repo_path: &Path, key: &str) -> Option<String> {
    let output = Command::new("git")
        .arg("config")
        .arg("--get")
        .arg(key)
        .current_dir(repo_path)
        .output();

    if let Ok(output) = output
        && output.status.success()
    {
        let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !value.is_empty() {
            return Some(value);
        }
    }

    None
}
