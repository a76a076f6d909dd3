//! Fetch command implementation

use super::output::{print_outcome, print_summary};
use super::{Command, CommandContext};
use crate::config::MirrorSpec;
use crate::mirror::{ContentSource, FetchReport, MirrorFetcher};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use colored::*;

/// Mirror a single repository given on the command line
pub struct FetchCommand {
    /// `owner/repo` or a GitHub URL
    pub reference: String,
    /// Local directory; defaults to the repository name
    pub target: Option<String>,
    /// Print the report as JSON instead of progress lines
    pub json: bool,
}

impl FetchCommand {
    pub fn mirror_spec(&self) -> Result<MirrorSpec> {
        let spec = MirrorSpec::from_reference(&self.reference)?;
        Ok(match &self.target {
            Some(target) => spec.with_target(target.clone()),
            None => spec,
        })
    }

    /// Run the fetch against any content source
    ///
    /// Fails when the filesystem fails or when the root listing was rejected;
    /// failures below the root only show up in the returned report.
    pub async fn execute_with<S: ContentSource>(&self, source: S) -> Result<FetchReport> {
        let spec = self.mirror_spec()?;

        let fetcher = if self.json {
            MirrorFetcher::new(source)
        } else {
            println!(
                "{}",
                format!("Fetching repository {}...", spec.full_name()).green()
            );
            MirrorFetcher::new(source).with_observer(print_outcome)
        };

        let report = fetcher.fetch_mirror(&spec).await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_summary(&report);
        }

        if report.root_failed() {
            let reason = report
                .failures()
                .next()
                .map(|(_, failure)| failure.reason.to_string())
                .unwrap_or_default();
            return Err(anyhow!(
                "Failed to list {}: {}",
                spec.full_name(),
                reason
            ));
        }

        Ok(report)
    }
}

#[async_trait]
impl Command for FetchCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let client = context.github_client()?;
        self.execute_with(client).await?;
        Ok(())
    }
}
