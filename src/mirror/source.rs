//! Where listings and file bodies come from

use anyhow::Result;
use async_trait::async_trait;
use mirror_github::{Download, GitHubClient, Listing};

/// The two remote calls a mirror walk needs
///
/// Non-2xx answers come back as `Rejected` values; `Err` is reserved for
/// transport and parse failures.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// List the immediate children of `path` (`""` is the repository root)
    async fn list_directory(&self, owner: &str, repo: &str, path: &str) -> Result<Listing>;

    /// Fetch the raw bytes behind a `download_url`
    async fn download(&self, url: &str) -> Result<Download>;
}

#[async_trait]
impl ContentSource for GitHubClient {
    async fn list_directory(&self, owner: &str, repo: &str, path: &str) -> Result<Listing> {
        GitHubClient::list_directory(self, owner, repo, path).await
    }

    async fn download(&self, url: &str) -> Result<Download> {
        GitHubClient::download(self, url).await
    }
}
