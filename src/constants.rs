//! Central constants for the gh-mirror application

/// Default values for GitHub operations
pub mod github {
    /// GitHub API base URL
    pub use mirror_github::API_BASE;

    /// Environment variable holding the personal access token
    pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

    /// Environment variable holding the GitHub username
    pub const USER_ENV: &str = "GITHUB_USER";
}

/// Default values for the completion collaborator
pub mod completion {
    /// Upper bound on generated tokens per request
    pub const DEFAULT_MAX_TOKENS: u32 = 500;

    /// Sampling temperature
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "mirror.yaml";
}
