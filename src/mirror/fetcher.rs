//! Depth-first repository mirror
//!
//! The walk is strictly sequential: each directory's listing is awaited
//! before its entries are processed, and entries are handled in the order
//! the API returned them. Remote failures are recorded in the report and the
//! walk moves on to the next sibling; filesystem failures abort the run.

use super::report::{FailureReason, FetchFailure, FetchReport, Outcome};
use super::source::ContentSource;
use super::tree::{FileNode, TreeNode, decode_entry, join_remote_path};
use crate::config::MirrorSpec;
use crate::utils::{ensure_directory_exists, is_safe_entry_name, write_file};
use anyhow::Result;
use futures::future::BoxFuture;
use mirror_github::{ContentEntry, Download, Listing};
use std::path::{Path, PathBuf};

/// Receives the local path (`None` for entries refused before reaching disk) and outcome
type Observer = Box<dyn Fn(Option<&Path>, &Outcome) + Send + Sync>;

/// Walks a repository through a [`ContentSource`] and writes it to disk
pub struct MirrorFetcher<S> {
    source: S,
    observer: Option<Observer>,
}

impl<S: ContentSource> MirrorFetcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            observer: None,
        }
    }

    /// Call `observer` for every outcome as soon as it is recorded
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(Option<&Path>, &Outcome) + Send + Sync + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mirror `owner/repo` into `local_root`
    ///
    /// Creates `local_root` (and parents) first. Returns `Err` only when the
    /// local filesystem fails; every remote failure ends up in the report.
    pub async fn fetch(
        &self,
        owner: &str,
        repo: &str,
        local_root: impl AsRef<Path>,
    ) -> Result<FetchReport> {
        let root = local_root.as_ref().to_path_buf();
        ensure_directory_exists(&root)?;

        let mut report = FetchReport::new(owner, repo, root.clone());

        match self.list_directory(owner, repo, "").await {
            Ok(entries) => {
                let tree = self
                    .materialize(owner, repo, "", entries, &root, &mut report)
                    .await?;
                report.tree = tree;
            }
            Err(reason) => {
                let failure = FetchFailure::new("", reason);
                self.record(&mut report, Some(root), Outcome::Failed(failure));
            }
        }

        Ok(report)
    }

    /// Mirror a configured repository into its target directory
    pub async fn fetch_mirror(&self, mirror: &MirrorSpec) -> Result<FetchReport> {
        self.fetch(&mirror.owner, &mirror.repo, mirror.target_dir())
            .await
    }

    /// One listing call; a rejected or failed call becomes the failure reason
    pub async fn list_directory(
        &self,
        owner: &str,
        repo: &str,
        remote_path: &str,
    ) -> std::result::Result<Vec<ContentEntry>, FailureReason> {
        match self.source.list_directory(owner, repo, remote_path).await {
            Ok(Listing::Entries(entries)) => Ok(entries),
            Ok(Listing::Rejected(failure)) => Err(failure.into()),
            Err(error) => Err(FailureReason::transport(&error)),
        }
    }

    fn materialize<'a>(
        &'a self,
        owner: &'a str,
        repo: &'a str,
        remote_dir: &'a str,
        entries: Vec<ContentEntry>,
        local_dir: &'a Path,
        report: &'a mut FetchReport,
    ) -> BoxFuture<'a, Result<Vec<TreeNode>>> {
        Box::pin(async move {
            let mut nodes = Vec::with_capacity(entries.len());

            for entry in entries {
                if !is_safe_entry_name(&entry.name) {
                    let failure = FetchFailure::new(
                        join_remote_path(remote_dir, &entry.name),
                        FailureReason::UnsafeName {
                            name: entry.name.clone(),
                        },
                    );
                    self.record(report, None, Outcome::Failed(failure));
                    continue;
                }

                let local_path = local_dir.join(&entry.name);
                let remote_path = join_remote_path(remote_dir, &entry.name);

                let node = match decode_entry(entry, remote_dir) {
                    Ok(node) => node,
                    Err(error) => {
                        let failure = FetchFailure::new(remote_path, FailureReason::decode(&error));
                        self.record(report, Some(local_path), Outcome::Failed(failure));
                        continue;
                    }
                };

                match node {
                    TreeNode::File(mut file) => match self.file_bytes(&mut file).await {
                        Ok(bytes) => {
                            write_file(&local_path, &bytes)?;
                            let outcome = Outcome::Written {
                                remote_path,
                                bytes: bytes.len() as u64,
                            };
                            self.record(report, Some(local_path), outcome);
                            nodes.push(TreeNode::File(file));
                        }
                        Err(reason) => {
                            let failure = FetchFailure::new(remote_path, reason);
                            self.record(report, Some(local_path), Outcome::Failed(failure));
                        }
                    },
                    TreeNode::Directory(mut dir) => {
                        // The local directory only appears once its listing succeeded
                        match self.list_directory(owner, repo, &remote_path).await {
                            Ok(children) => {
                                ensure_directory_exists(&local_path)?;
                                self.record(
                                    report,
                                    Some(local_path.clone()),
                                    Outcome::Directory {
                                        remote_path: remote_path.clone(),
                                    },
                                );
                                dir.children = self
                                    .materialize(
                                        owner,
                                        repo,
                                        &remote_path,
                                        children,
                                        &local_path,
                                        report,
                                    )
                                    .await?;
                                nodes.push(TreeNode::Directory(dir));
                            }
                            Err(reason) => {
                                let failure = FetchFailure::new(remote_path, reason);
                                self.record(report, Some(local_path), Outcome::Failed(failure));
                            }
                        }
                    }
                    TreeNode::Other(other) => {
                        let outcome = Outcome::Skipped {
                            remote_path,
                            kind: other.kind,
                        };
                        self.record(report, Some(local_path), outcome);
                        nodes.push(TreeNode::Other(other));
                    }
                }
            }

            Ok(nodes)
        })
    }

    /// Inline body if the listing carried one, else a download
    ///
    /// The inline body is moved out so the report tree does not keep it.
    async fn file_bytes(&self, file: &mut FileNode) -> std::result::Result<Vec<u8>, FailureReason> {
        if let Some(bytes) = file.content.take() {
            return Ok(bytes);
        }

        let url = file
            .download_url
            .as_deref()
            .ok_or(FailureReason::MissingDownloadUrl)?;

        match self.source.download(url).await {
            Ok(Download::Bytes(bytes)) => Ok(bytes),
            Ok(Download::Rejected(failure)) => Err(failure.into()),
            Err(error) => Err(FailureReason::transport(&error)),
        }
    }

    /// Entries refused before they got a place on disk are recorded without a local path
    fn record(
        &self,
        report: &mut FetchReport,
        local_path: Option<PathBuf>,
        outcome: Outcome,
    ) {
        if let Some(observer) = &self.observer {
            observer(local_path.as_deref(), &outcome);
        }
        report.record(local_path, outcome);
    }
}
