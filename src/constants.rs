//! Central constants for the repos-export application

/// Default values for GitHub API access
pub mod github {
    use std::time::Duration;

    /// GitHub API base URL
    pub const API_BASE: &str = "https://api.github.com";

    /// Host expected in the `origin` remote URL
    pub const HOST: &str = "github.com";

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("repos-export/", env!("CARGO_PKG_VERSION"));

    /// Number of repositories requested per page
    pub const PER_PAGE: u32 = 100;

    /// Timeout applied to each API request
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Sources checked when resolving an API token
pub mod auth {
    /// Environment variable holding the API token
    pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

    /// Git configuration key consulted when the environment variable is unset
    pub const TOKEN_GIT_CONFIG_KEY: &str = "github.token";
}

/// Default values for output files
pub mod output {
    /// CSV file written to the current working directory
    pub const DEFAULT_CSV_FILE: &str = "repos_with_write_access.csv";
}
