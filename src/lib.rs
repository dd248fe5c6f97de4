//! Repos-export - export the GitHub repositories a user owns or can push to

pub mod constants;
pub mod credentials;
pub mod export;
pub mod git;
pub mod github;
pub mod origin;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use github::{GitHubClient, Permission, RepositoryRecord};
pub use origin::Origin;
