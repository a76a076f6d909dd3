//! Utility functions for GitHub operations

use anyhow::{Result, anyhow};

/// Parse a repository reference into `(owner, repo)`
///
/// Accepts the `owner/repo` shorthand as well as full GitHub URLs:
/// - SSH: `git@github.com:owner/repo.git`
/// - HTTPS: `https://github.com/owner/repo.git`
/// - Legacy: `github.com/owner/repo`
pub fn parse_github_url(url: &str) -> Result<(String, String)> {
    let url = url.trim().trim_end_matches('/').trim_end_matches(".git");

    // Handle SSH URLs: git@github.com:owner/repo
    if url.starts_with("git@") {
        if let Some(colon_pos) = url.find(':') {
            let parts: Vec<&str> = url[colon_pos + 1..].split('/').collect();
            if let [owner, repo] = parts.as_slice() {
                return owned_pair(owner, repo, url);
            }
        }
        return Err(anyhow!("Invalid GitHub URL format: {}", url));
    }

    // Handle HTTPS URLs: https://github.com/owner/repo
    if url.starts_with("https://") || url.starts_with("http://") {
        let without_protocol = url
            .trim_start_matches("https://")
            .trim_start_matches("http://");
        let parts: Vec<&str> = without_protocol.split('/').collect();
        if parts.len() >= 3 {
            return owned_pair(parts[1], parts[2], url);
        }
        return Err(anyhow!("Invalid GitHub URL format: {}", url));
    }

    // Legacy support: github.com/owner/repo
    if url.contains("github.com") {
        let parts: Vec<&str> = url.split('/').collect();
        if parts.len() >= 3 {
            let idx = parts.len() - 2;
            return owned_pair(parts[idx], parts[idx + 1], url);
        }
        return Err(anyhow!("Invalid GitHub URL format: {}", url));
    }

    // Shorthand: owner/repo
    let parts: Vec<&str> = url.split('/').collect();
    if let [owner, repo] = parts.as_slice() {
        return owned_pair(owner, repo, url);
    }

    Err(anyhow!("Invalid GitHub URL format: {}", url))
}

fn owned_pair(owner: &str, repo: &str, url: &str) -> Result<(String, String)> {
    if owner.is_empty() || repo.is_empty() {
        return Err(anyhow!("Invalid GitHub URL format: {}", url));
    }
    Ok((owner.to_string(), repo.to_string()))
}
