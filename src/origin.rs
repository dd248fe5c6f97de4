//! Resolution of the local checkout's GitHub remote

use crate::constants::github;
use crate::git;
use anyhow::{Result, anyhow, bail};
use std::path::Path;

/// Owner and repository name extracted from the `origin` remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub owner: String,
    pub repo: String,
}

/// Resolve the GitHub owner and repository for a local checkout
///
/// Fails when the directory is not a git repository, no `origin` remote is
/// configured, or the remote does not point at github.com. There is no
/// fallback owner; the caller aborts on failure.
pub fn resolve(repo_path: &Path) -> Result<Origin> {
    let url = git::remote_origin_url(repo_path)?.ok_or_else(|| {
        anyhow!("No 'origin' remote found. Run this inside a git repository with a GitHub remote.")
    })?;

    let (owner, repo) = parse_remote_url(&url)?;
    Ok(Origin { owner, repo })
}

/// Parse a remote URL to extract owner and repository name
///
/// Supports SSH remotes (`git@github.com:owner/repo.git`) and HTTPS remotes
/// (`https://github.com/owner/repo.git`); the `.git` suffix and a trailing
/// slash are optional. Remotes pointing at any other host are rejected.
pub fn parse_remote_url(url: &str) -> Result<(String, String)> {
    let trimmed = url.trim_end_matches('/').trim_end_matches(".git");

    // SSH remotes: user@host:owner/repo
    if !trimmed.contains("://")
        && let Some((_, rest)) = trimmed.split_once('@')
        && let Some((host, path)) = rest.split_once(':')
    {
        ensure_expected_host(host, url)?;
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty() {
            return Ok((parts[0].to_string(), parts[1].to_string()));
        }
        bail!("Invalid remote URL format: {}", url);
    }

    // HTTPS remotes: https://host/owner/repo
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        let without_protocol = trimmed
            .trim_start_matches("https://")
            .trim_start_matches("http://");

        let parts: Vec<&str> = without_protocol.split('/').collect();
        if parts.len() >= 3 && !parts[1].is_empty() && !parts[2].is_empty() {
            ensure_expected_host(parts[0], url)?;
            return Ok((parts[1].to_string(), parts[2].to_string()));
        }
        bail!("Invalid remote URL format: {}", url);
    }

    Err(anyhow!("Invalid remote URL format: {}", url))
}

fn ensure_expected_host(host: &str, url: &str) -> Result<()> {
    if host != github::HOST {
        bail!("Remote '{}' does not point at {}", url, github::HOST);
    }
    Ok(())
}
