//! Base types and traits for the command pattern

use crate::config::Config;
use anyhow::{Result, anyhow};
use mirror_github::{Credentials, GitHubClient};

/// Context passed to all commands containing shared configuration and options
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// The loaded configuration
    pub config: Config,
    /// Resolved credentials; `None` when only offline work was requested
    pub credentials: Option<Credentials>,
}

impl CommandContext {
    pub fn new(config: Config, credentials: Option<Credentials>) -> Self {
        Self {
            config,
            credentials,
        }
    }

    /// Credentials, or an error naming where they can come from
    pub fn require_credentials(&self) -> Result<&Credentials> {
        self.credentials.as_ref().ok_or_else(|| {
            anyhow!(
                "GitHub credentials are required. Use --user/--token or set GITHUB_USER/GITHUB_TOKEN."
            )
        })
    }

    /// A client for the configured API root
    pub fn github_client(&self) -> Result<GitHubClient> {
        let credentials = self.require_credentials()?.clone();
        Ok(GitHubClient::with_base_url(
            credentials,
            self.config.api_base(),
        ))
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
