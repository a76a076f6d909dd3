//! What happened to every path during one fetch run

use super::tree::TreeNode;
use chrono::{DateTime, Utc};
use mirror_github::{ApiFailure, EntryKind};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// Non-2xx answer from the API
    Api { status: u16, body: String },
    /// The request never produced a usable response
    Transport { message: String },
    /// Inline content was not valid base64
    Decode { message: String },
    /// A file without inline content and without a download URL
    MissingDownloadUrl,
    /// An entry name that would escape its directory
    UnsafeName { name: String },
}

impl FailureReason {
    pub fn transport(error: &anyhow::Error) -> Self {
        FailureReason::Transport {
            message: format!("{:#}", error),
        }
    }

    pub fn decode(error: &anyhow::Error) -> Self {
        FailureReason::Decode {
            message: format!("{:#}", error),
        }
    }
}

impl From<ApiFailure> for FailureReason {
    fn from(failure: ApiFailure) -> Self {
        FailureReason::Api {
            status: failure.status,
            body: failure.body,
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Api { status, body } => write!(f, "HTTP {}: {}", status, body.trim()),
            FailureReason::Transport { message } => write!(f, "request failed: {}", message),
            FailureReason::Decode { message } => write!(f, "decode failed: {}", message),
            FailureReason::MissingDownloadUrl => write!(f, "no inline content and no download URL"),
            FailureReason::UnsafeName { name } => write!(f, "unsafe entry name '{}'", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchFailure {
    pub remote_path: String,
    pub reason: FailureReason,
}

impl FetchFailure {
    pub fn new(remote_path: impl Into<String>, reason: FailureReason) -> Self {
        Self {
            remote_path: remote_path.into(),
            reason,
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.remote_path.is_empty() {
            "/"
        } else {
            &self.remote_path
        };
        write!(f, "{}: {}", path, self.reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Written { remote_path: String, bytes: u64 },
    Directory { remote_path: String },
    Skipped { remote_path: String, kind: EntryKind },
    Failed(FetchFailure),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    pub fn remote_path(&self) -> &str {
        match self {
            Outcome::Written { remote_path, .. }
            | Outcome::Directory { remote_path }
            | Outcome::Skipped { remote_path, .. } => remote_path,
            Outcome::Failed(failure) => &failure.remote_path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    /// `None` for entries refused before they got a place on disk
    pub local_path: Option<PathBuf>,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FetchSummary {
    pub files: usize,
    pub directories: usize,
    pub skipped: usize,
    pub failed: usize,
    pub bytes: u64,
}

/// Outcome of one fetch, keyed by local path in processing order
#[derive(Debug, Clone, Serialize)]
pub struct FetchReport {
    pub owner: String,
    pub repo: String,
    pub root: PathBuf,
    pub fetched_at: DateTime<Utc>,
    pub entries: Vec<ReportEntry>,
    /// Every level that was listed successfully, file bodies dropped
    pub tree: Vec<TreeNode>,
}

impl FetchReport {
    pub fn new(owner: &str, repo: &str, root: impl Into<PathBuf>) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            root: root.into(),
            fetched_at: Utc::now(),
            entries: Vec::new(),
            tree: Vec::new(),
        }
    }

    pub fn record(&mut self, local_path: Option<PathBuf>, outcome: Outcome) {
        self.entries.push(ReportEntry {
            local_path,
            outcome,
        });
    }

    /// Outcome recorded for `local_path`
    pub fn get(&self, local_path: impl AsRef<Path>) -> Option<&Outcome> {
        let local_path = local_path.as_ref();
        self.entries
            .iter()
            .find(|entry| entry.local_path.as_deref() == Some(local_path))
            .map(|entry| &entry.outcome)
    }

    /// Outcome recorded for a repository path, including entries never placed on disk
    pub fn get_remote(&self, remote_path: &str) -> Option<&Outcome> {
        self.entries
            .iter()
            .find(|entry| entry.outcome.remote_path() == remote_path)
            .map(|entry| &entry.outcome)
    }

    pub fn failures(&self) -> impl Iterator<Item = (Option<&Path>, &FetchFailure)> {
        self.entries.iter().filter_map(|entry| match &entry.outcome {
            Outcome::Failed(failure) => Some((entry.local_path.as_deref(), failure)),
            _ => None,
        })
    }

    /// Whether the root listing itself failed, i.e. nothing was mirrored
    pub fn root_failed(&self) -> bool {
        self.get(&self.root).is_some_and(Outcome::is_failure)
    }

    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn summary(&self) -> FetchSummary {
        let mut summary = FetchSummary::default();
        for entry in &self.entries {
            match &entry.outcome {
                Outcome::Written { bytes, .. } => {
                    summary.files += 1;
                    summary.bytes += bytes;
                }
                Outcome::Directory { .. } => summary.directories += 1,
                Outcome::Skipped { .. } => summary.skipped += 1,
                Outcome::Failed(_) => summary.failed += 1,
            }
        }
        summary
    }
}
