//! Repository listing operations

use super::client::GitHubClient;
use super::types::{ApiRepo, RepositoryRecord};
use crate::constants::github;
use anyhow::{Context, Result, anyhow};

impl GitHubClient {
    /// List every repository under `owner` that the owner holds or can push to
    ///
    /// Pages through the user listing endpoint, newest-updated first, until
    /// the API returns an empty page. Read-only collaborations are dropped
    /// and the API's ordering is preserved. A failure on any page aborts the
    /// whole listing; pages fetched so far are discarded.
    pub async fn list_repos_with_write_access(
        &self,
        owner: &str,
    ) -> Result<Vec<RepositoryRecord>> {
        let mut records = Vec::new();
        let mut page: u32 = 1;

        loop {
            let repos = self.fetch_repo_page(owner, page).await?;
            if repos.is_empty() {
                break;
            }

            records.extend(
                repos
                    .into_iter()
                    .filter_map(|repo| RepositoryRecord::from_api(repo, owner)),
            );
            page += 1;
        }

        Ok(records)
    }

    async fn fetch_repo_page(&self, owner: &str, page: u32) -> Result<Vec<ApiRepo>> {
        let url = format!("{}/users/{}/repos", self.api_base, owner);
        let params = [
            ("page", page.to_string()),
            ("per_page", github::PER_PAGE.to_string()),
            ("sort", "updated".to_string()),
            ("direction", "desc".to_string()),
        ];

        let mut request = self
            .client
            .get(&url)
            .query(&params)
            .header("User-Agent", github::DEFAULT_USER_AGENT)
            .header("Accept", "application/vnd.github.v3+json");

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to fetch repositories page {}", page))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_msg = match status.as_u16() {
                401 => "Bad credentials. Check your GITHUB_TOKEN.",
                403 if self.token.is_none() => {
                    "Access forbidden or rate limited. Set GITHUB_TOKEN to authenticate."
                }
                403 => "Access forbidden. Check your GITHUB_TOKEN permissions.",
                _ => status.canonical_reason().unwrap_or("Unknown error"),
            };
            return Err(anyhow!(
                "Failed to fetch repositories page {} ({} {})",
                page,
                status.as_u16(),
                error_msg
            ));
        }

        response
            .json()
            .await
            .context("Failed to parse GitHub API response")
    }
}
