//! Repository contents operations
//!
//! `GET /repos/{owner}/{repo}/contents/{path}` lists one directory level.
//! Small files come back with their body inline as base64; everything else is
//! fetched through the entry's `download_url`.

use crate::client::GitHubClient;
use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Response;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of the `type` field of a contents entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryKind::File => "file",
            EntryKind::Dir => "dir",
            EntryKind::Symlink => "symlink",
            EntryKind::Submodule => "submodule",
            EntryKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// One item of a contents listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub git_url: Option<String>,
}

impl ContentEntry {
    /// Inline base64 body, if the listing embedded a non-empty one
    pub fn inline_content(&self) -> Option<&str> {
        self.content
            .as_deref()
            .filter(|content| !content.trim().is_empty())
    }

    /// A submodule as it appears inside a directory listing
    ///
    /// Directory listings report submodules as `"type": "file"` with no body
    /// and no download URL; their `git_url` points at the linked repository's
    /// tree instead of a blob.
    pub fn is_submodule_link(&self) -> bool {
        match self.kind {
            EntryKind::Submodule => true,
            EntryKind::File => {
                self.inline_content().is_none()
                    && self.download_url.is_none()
                    && self
                        .git_url
                        .as_deref()
                        .is_some_and(|url| url.contains("/git/trees/"))
            }
            _ => false,
        }
    }
}

/// Listing a file path returns a single object instead of an array
#[derive(Deserialize)]
#[serde(untagged)]
enum ContentsPayload {
    Many(Vec<ContentEntry>),
    One(Box<ContentEntry>),
}

impl ContentsPayload {
    fn into_entries(self) -> Vec<ContentEntry> {
        match self {
            ContentsPayload::Many(entries) => entries,
            ContentsPayload::One(entry) => vec![*entry],
        }
    }
}

/// A non-2xx answer from the API, kept as data rather than raised
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFailure {
    pub status: u16,
    pub body: String,
}

impl ApiFailure {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Capture status and body of an unsuccessful response
    pub async fn from_response(response: Response) -> Self {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Self { status, body }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}: {}", self.status, self.body.trim())
    }
}

/// Result of one listing call
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Entries(Vec<ContentEntry>),
    Rejected(ApiFailure),
}

/// Result of one raw download
#[derive(Debug, Clone, PartialEq)]
pub enum Download {
    Bytes(Vec<u8>),
    Rejected(ApiFailure),
}

/// Decode an inline `content` field
///
/// GitHub wraps the base64 body every 60 columns, so whitespace is dropped
/// before decoding.
pub fn decode_inline_content(encoded: &str) -> Result<Vec<u8>> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD
        .decode(compact.as_bytes())
        .context("Failed to decode inline base64 content")
}

impl GitHubClient {
    /// List the immediate children of `path` (`""` is the repository root)
    ///
    /// Transport and parse failures are errors; a non-2xx status is returned
    /// as [`Listing::Rejected`] carrying status and body.
    pub async fn list_directory(&self, owner: &str, repo: &str, path: &str) -> Result<Listing> {
        let url = self.contents_url(owner, repo, path)?;

        let response = self
            .get(url.as_str())
            .send()
            .await
            .with_context(|| format!("Failed to request {}", url))?;

        if !response.status().is_success() {
            return Ok(Listing::Rejected(ApiFailure::from_response(response).await));
        }

        let payload: ContentsPayload = response
            .json()
            .await
            .context("Failed to parse contents listing")?;
        Ok(Listing::Entries(payload.into_entries()))
    }

    /// Fetch the raw bytes behind a `download_url`
    pub async fn download(&self, url: &str) -> Result<Download> {
        let response = self
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to request {}", url))?;

        if !response.status().is_success() {
            return Ok(Download::Rejected(ApiFailure::from_response(response).await));
        }

        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read body of {}", url))?;
        Ok(Download::Bytes(bytes.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_WORLD_LISTING: &str = r#"[
        {
            "name": "README",
            "path": "README",
            "sha": "980a0d5f19a64b4b30a87d4206aade58726b60e3",
            "size": 13,
            "type": "file",
            "download_url": "https://raw.githubusercontent.com/octocat/Hello-World/master/README"
        },
        {
            "name": "src",
            "path": "src",
            "size": 0,
            "type": "dir",
            "download_url": null
        },
        {
            "name": "vendor",
            "path": "vendor",
            "size": 0,
            "type": "submodule",
            "download_url": null
        }
    ]"#;

    #[test]
    fn test_parse_directory_listing() {
        let payload: ContentsPayload = serde_json::from_str(HELLO_WORLD_LISTING).unwrap();
        let entries = payload.into_entries();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "README");
        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[0].size, 13);
        assert!(entries[0].inline_content().is_none());
        assert_eq!(entries[1].kind, EntryKind::Dir);
        assert!(entries[1].download_url.is_none());
        assert_eq!(entries[2].kind, EntryKind::Submodule);
    }

    #[test]
    fn test_parse_single_file_payload() {
        let json = r#"{
            "name": "README.md",
            "path": "README.md",
            "size": 5,
            "type": "file",
            "encoding": "base64",
            "content": "aGVsbG8=\n",
            "download_url": "https://raw.githubusercontent.com/o/r/main/README.md"
        }"#;
        let payload: ContentsPayload = serde_json::from_str(json).unwrap();
        let entries = payload.into_entries();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].inline_content(), Some("aGVsbG8=\n"));
        assert_eq!(entries[0].encoding.as_deref(), Some("base64"));
    }

    #[test]
    fn test_unknown_kind_is_tolerated() {
        let json = r#"[{"name": "x", "type": "something-new"}]"#;
        let payload: ContentsPayload = serde_json::from_str(json).unwrap();
        let entries = payload.into_entries();
        assert_eq!(entries[0].kind, EntryKind::Unknown);
        assert_eq!(entries[0].path, "");
        assert_eq!(entries[0].size, 0);
    }

    #[test]
    fn test_empty_inline_content_is_ignored() {
        let entry = ContentEntry {
            name: "empty".to_string(),
            path: "empty".to_string(),
            kind: EntryKind::File,
            size: 0,
            content: Some("\n".to_string()),
            encoding: Some("base64".to_string()),
            download_url: None,
            git_url: None,
        };
        assert!(entry.inline_content().is_none());
    }

    #[test]
    fn test_submodule_listed_as_file() {
        let json = r#"[
            {
                "name": "grit",
                "path": "grit",
                "size": 0,
                "type": "file",
                "download_url": null,
                "git_url": "https://api.github.com/repos/jnunemaker/grit/git/trees/a3b6b7e2"
            },
            {
                "name": "README",
                "path": "README",
                "size": 13,
                "type": "file",
                "download_url": null,
                "git_url": "https://api.github.com/repos/octocat/Hello-World/git/blobs/980a0d5f"
            }
        ]"#;
        let payload: ContentsPayload = serde_json::from_str(json).unwrap();
        let entries = payload.into_entries();

        assert!(entries[0].is_submodule_link());
        assert!(!entries[1].is_submodule_link());
    }

    #[test]
    fn test_decode_inline_content_with_line_breaks() {
        // "Hello World!\n" split the way the API wraps long bodies
        let decoded = decode_inline_content("SGVsbG8g\nV29ybGQh\nCg==\n").unwrap();
        assert_eq!(decoded, b"Hello World!\n");
    }

    #[test]
    fn test_decode_inline_content_rejects_garbage() {
        assert!(decode_inline_content("not*base64!").is_err());
    }

    #[test]
    fn test_api_failure_display() {
        let failure = ApiFailure::new(404, "{\"message\":\"Not Found\"}\n");
        assert_eq!(failure.to_string(), "HTTP 404: {\"message\":\"Not Found\"}");
    }

    #[test]
    fn test_entry_kind_display() {
        assert_eq!(EntryKind::Dir.to_string(), "dir");
        assert_eq!(EntryKind::Symlink.to_string(), "symlink");
    }
}
