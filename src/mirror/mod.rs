//! Repository mirroring
//!
//! ## Architecture
//!
//! - [`source`]: the [`ContentSource`] seam over the two remote calls
//! - [`tree`]: tree nodes decoded from listing entries
//! - [`report`]: per-path outcomes of one fetch run
//! - [`fetcher`]: the depth-first walk that writes the tree to disk
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gh_mirror::{Credentials, GitHubClient, MirrorFetcher};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = GitHubClient::new(Credentials::new("octocat", "ghp_token"));
//! let fetcher = MirrorFetcher::new(client);
//! let report = fetcher.fetch("octocat", "Hello-World", "Hello-World").await?;
//! println!("{} files written", report.summary().files);
//! # Ok(())
//! # }
//! ```

pub mod fetcher;
pub mod report;
pub mod source;
pub mod tree;

pub use fetcher::MirrorFetcher;
pub use report::{FailureReason, FetchFailure, FetchReport, FetchSummary, Outcome, ReportEntry};
pub use source::ContentSource;
pub use tree::{DirectoryNode, FileNode, OtherNode, TreeNode, decode_entry, join_remote_path};
