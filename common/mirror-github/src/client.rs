//! GitHub client implementation

use crate::auth::Credentials;
use anyhow::{Result, anyhow};
use reqwest::{Client, RequestBuilder, Url};

/// GitHub API base URL
pub const API_BASE: &str = "https://api.github.com";

/// GitHub API client for making authenticated requests
///
/// Every request carries the bearer token, the v3 `Accept` header and a
/// `User-Agent` derived from the username. Endpoint groups extend this type
/// with their own `impl` blocks (see [`crate::contents`]).
pub struct GitHubClient {
    pub(crate) client: Client,
    pub(crate) credentials: Credentials,
    pub(crate) base_url: String,
}

impl GitHubClient {
    /// Create a client talking to api.github.com
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, API_BASE)
    }

    /// Create a client for a different API root, e.g. a GitHub Enterprise host
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            credentials,
            base_url,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build `{base}/repos/{owner}/{repo}/contents/{path}`
    ///
    /// Each path segment is percent-encoded separately so names with spaces
    /// or `#` survive, while `/` keeps separating directories.
    pub fn contents_url(&self, owner: &str, repo: &str, path: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| anyhow!("Invalid API base URL '{}': {}", self.base_url, e))?;

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow!("API base URL cannot carry a path: {}", self.base_url))?;
            segments
                .pop_if_empty()
                .extend(["repos", owner, repo, "contents"]);

            let mut pushed = false;
            for segment in path.split('/').filter(|s| !s.is_empty()) {
                segments.push(segment);
                pushed = true;
            }
            if !pushed {
                segments.push("");
            }
        }

        Ok(url)
    }

    /// Start an authenticated GET request
    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.client
            .get(url)
            .header("Authorization", self.credentials.auth_header())
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", self.credentials.user_agent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GitHubClient {
        GitHubClient::new(Credentials::new("octocat", "token"))
    }

    #[test]
    fn test_contents_url_root() {
        let url = client().contents_url("octocat", "Hello-World", "").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/octocat/Hello-World/contents/"
        );
    }

    #[test]
    fn test_contents_url_nested_path() {
        let url = client()
            .contents_url("octocat", "Hello-World", "src/bin")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/octocat/Hello-World/contents/src/bin"
        );
    }

    #[test]
    fn test_contents_url_encodes_segments() {
        let url = client()
            .contents_url("octocat", "Hello-World", "docs/my notes#1.md")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/octocat/Hello-World/contents/docs/my%20notes%231.md"
        );
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client = GitHubClient::with_base_url(
            Credentials::new("octocat", "token"),
            "https://ghe.example.com/api/v3/",
        );
        assert_eq!(client.base_url(), "https://ghe.example.com/api/v3");

        let url = client.contents_url("team", "project", "README.md").unwrap();
        assert_eq!(
            url.as_str(),
            "https://ghe.example.com/api/v3/repos/team/project/contents/README.md"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let client = GitHubClient::with_base_url(Credentials::new("a", "b"), "not a url");
        assert!(client.contents_url("o", "r", "").is_err());
    }
}
