//! API token resolution
//!
//! The token is looked up once at startup and threaded through the rest of
//! the pipeline: first the `GITHUB_TOKEN` environment variable, then the
//! `github.token` git configuration key. A missing token is not an error;
//! the pipeline proceeds unauthenticated under the API's anonymous rate
//! limits. Tokens are not validated here, an invalid token surfaces as an
//! HTTP error during listing.

use crate::constants::auth;
use crate::git;
use std::env;
use std::path::Path;

/// Resolve the API token for the current run, if any
///
/// Empty values count as unset.
pub fn resolve_token(repo_path: &Path) -> Option<String> {
    if let Ok(token) = env::var(auth::TOKEN_ENV_VAR)
        && !token.is_empty()
    {
        return Some(token);
    }

    git::config_value(repo_path, auth::TOKEN_GIT_CONFIG_KEY)
}
