//! GitHub API client implementation
//!
//! The client encapsulates the HTTP client and the optional token. Endpoint
//! operations are organized into sibling modules that extend the client with
//! `impl` blocks; see `repositories.rs` for repository listing.

use crate::constants::github;
use anyhow::Result;
use reqwest::Client;

/// Client for GitHub's REST API
///
/// Without a token, requests are anonymous and subject to the API's
/// unauthenticated rate limits.
pub struct GitHubClient {
    pub(crate) client: Client,
    pub(crate) token: Option<String>,
    pub(crate) api_base: String,
}

impl GitHubClient {
    /// Create a client talking to api.github.com
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_api_base(token, github::API_BASE)
    }

    /// Create a client against a custom API base URL
    pub fn with_api_base(token: Option<String>, api_base: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(github::REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            token,
            api_base: api_base.into(),
        })
    }

    /// Check whether the client sends authenticated requests
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
