//! A repository to mirror

use anyhow::Result;
use mirror_github::parse_github_url;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One `(owner, repo, target)` entry of the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub owner: String,
    pub repo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl MirrorSpec {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            name: None,
            owner: owner.into(),
            repo: repo.into(),
            target: None,
        }
    }

    /// Build from `owner/repo` or any GitHub URL form
    pub fn from_reference(reference: &str) -> Result<Self> {
        let (owner, repo) = parse_github_url(reference)?;
        Ok(Self::new(owner, repo))
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Name used to select this mirror on the command line
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.repo)
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Local directory to mirror into: the explicit target, else the repo name
    pub fn target_dir(&self) -> PathBuf {
        match &self.target {
            Some(target) => PathBuf::from(target),
            None => PathBuf::from(&self.repo),
        }
    }
}
