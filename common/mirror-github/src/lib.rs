//! GitHub API client library
//!
//! Low-level access to the parts of the GitHub REST API needed to mirror a
//! repository: the contents listing call and raw file downloads.
//!
//! ## Modules
//!
//! - [`auth`]: Username/token credentials and the headers derived from them
//! - [`client`]: Core GitHub client implementation
//! - [`contents`]: Contents listing, raw downloads and inline content decoding
//! - [`util`]: Utility functions for GitHub operations

mod auth;
mod client;
mod contents;
mod util;

// Re-export public API
pub use auth::Credentials;
pub use client::{API_BASE, GitHubClient};
pub use contents::{
    ApiFailure, ContentEntry, Download, EntryKind, Listing, decode_inline_content,
};
pub use util::parse_github_url;
