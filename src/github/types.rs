//! Response views and the exported record shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Access level the queried owner holds on an exported repository
///
/// `Admin` for repositories the owner holds; `Write` for repositories of
/// another account the owner can push to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Admin,
    Write,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Permission::Admin => "admin",
            Permission::Write => "write",
        })
    }
}

/// Owner block of an API repository object
#[derive(Deserialize, Debug, Clone)]
pub struct RepoOwner {
    pub login: String,
}

/// Permissions block of an API repository object
///
/// Absent entirely on anonymous requests; individual flags default to false
/// when omitted.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RepoPermissions {
    #[serde(default)]
    pub push: bool,
}

/// One element of the user repository listing response
#[derive(Deserialize, Debug, Clone)]
pub struct ApiRepo {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    pub updated_at: DateTime<Utc>,
    pub owner: RepoOwner,
    #[serde(default)]
    pub permissions: Option<RepoPermissions>,
}

/// Flat record written to the CSV export
///
/// Field order matches the exported column order. Records are built once per
/// API page and never mutated afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RepositoryRecord {
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub url: String,
    pub private: bool,
    pub language: String,
    pub stars: u64,
    pub updated_at: DateTime<Utc>,
    pub permissions: Permission,
}

impl RepositoryRecord {
    /// Project an API repository into an export record
    ///
    /// Returns `None` for repositories the queried owner neither holds nor
    /// can push to (read-only collaborations). Missing description and
    /// language fields become empty strings.
    pub fn from_api(repo: ApiRepo, owner: &str) -> Option<Self> {
        let owned = repo.owner.login == owner;
        let can_push = repo.permissions.as_ref().is_some_and(|p| p.push);

        if !owned && !can_push {
            return None;
        }

        Some(Self {
            name: repo.name,
            full_name: repo.full_name,
            description: repo.description.unwrap_or_default(),
            url: repo.html_url,
            private: repo.private,
            language: repo.language.unwrap_or_default(),
            stars: repo.stargazers_count,
            updated_at: repo.updated_at,
            permissions: if owned {
                Permission::Admin
            } else {
                Permission::Write
            },
        })
    }
}
