//! Common test support utilities and fixtures
//!
//! An in-memory [`ContentSource`] standing in for the GitHub API, plus
//! builders for listing entries.

#![allow(dead_code)]

use anyhow::{Result, bail};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use gh_mirror::ContentSource;
use mirror_github::{ApiFailure, ContentEntry, Download, EntryKind, Listing};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Listings keyed by remote path, downloads keyed by URL
#[derive(Default)]
pub struct FakeSource {
    listings: HashMap<String, Listing>,
    downloads: HashMap<String, Download>,
    broken: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(mut self, path: &str, entries: Vec<ContentEntry>) -> Self {
        self.listings
            .insert(path.to_string(), Listing::Entries(entries));
        self
    }

    pub fn with_rejected_listing(mut self, path: &str, status: u16, body: &str) -> Self {
        self.listings.insert(
            path.to_string(),
            Listing::Rejected(ApiFailure::new(status, body)),
        );
        self
    }

    pub fn with_download(mut self, url: &str, bytes: &[u8]) -> Self {
        self.downloads
            .insert(url.to_string(), Download::Bytes(bytes.to_vec()));
        self
    }

    pub fn with_rejected_download(mut self, url: &str, status: u16, body: &str) -> Self {
        self.downloads.insert(
            url.to_string(),
            Download::Rejected(ApiFailure::new(status, body)),
        );
        self
    }

    /// Make the listing of `path` (or the download of `url`) fail in transport
    pub fn with_transport_failure(mut self, path_or_url: &str) -> Self {
        self.broken.insert(path_or_url.to_string());
        self
    }

    /// Every call made so far, as `list:<path>` or `download:<url>`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentSource for FakeSource {
    async fn list_directory(&self, _owner: &str, _repo: &str, path: &str) -> Result<Listing> {
        self.calls.lock().unwrap().push(format!("list:{}", path));

        if self.broken.contains(path) {
            bail!("connection reset while listing '{}'", path);
        }

        Ok(self.listings.get(path).cloned().unwrap_or_else(|| {
            Listing::Rejected(ApiFailure::new(404, r#"{"message":"Not Found"}"#))
        }))
    }

    async fn download(&self, url: &str) -> Result<Download> {
        self.calls.lock().unwrap().push(format!("download:{}", url));

        if self.broken.contains(url) {
            bail!("connection reset while downloading {}", url);
        }

        Ok(self.downloads.get(url).cloned().unwrap_or_else(|| {
            Download::Rejected(ApiFailure::new(404, "404: Not Found"))
        }))
    }
}

pub fn entry(name: &str, kind: EntryKind) -> ContentEntry {
    ContentEntry {
        name: name.to_string(),
        path: String::new(),
        kind,
        size: 0,
        content: None,
        encoding: None,
        download_url: None,
        git_url: None,
    }
}

/// A submodule the way directory listings report it: a bodiless `file`
pub fn submodule_link(name: &str, linked_repo: &str) -> ContentEntry {
    ContentEntry {
        git_url: Some(format!(
            "https://api.github.com/repos/{}/git/trees/6c1e6b4a",
            linked_repo
        )),
        ..entry(name, EntryKind::File)
    }
}

/// A file whose body is embedded in the listing, wrapped like the API does
pub fn inline_file(name: &str, bytes: &[u8]) -> ContentEntry {
    let encoded = STANDARD.encode(bytes);
    let wrapped: Vec<String> = encoded
        .as_bytes()
        .chunks(60)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect();

    ContentEntry {
        size: bytes.len() as u64,
        content: Some(format!("{}\n", wrapped.join("\n"))),
        encoding: Some("base64".to_string()),
        ..entry(name, EntryKind::File)
    }
}

/// A file that must be fetched through its download URL
pub fn remote_file(name: &str, url: &str, size: u64) -> ContentEntry {
    ContentEntry {
        size,
        download_url: Some(url.to_string()),
        ..entry(name, EntryKind::File)
    }
}

pub fn dir(name: &str) -> ContentEntry {
    entry(name, EntryKind::Dir)
}

pub fn raw_url(path: &str) -> String {
    format!(
        "https://raw.githubusercontent.com/octocat/Hello-World/master/{}",
        path
    )
}
