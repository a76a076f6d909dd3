//! Sync command implementation

use super::output::{print_outcome, print_summary};
use super::{Command, CommandContext};
use crate::config::Config;
use crate::mirror::{ContentSource, MirrorFetcher};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Mirror every repository listed in the config, one after another
pub struct SyncCommand {
    /// Restrict to these mirror names; empty means all
    pub names: Vec<String>,
}

impl SyncCommand {
    pub async fn execute_with<S: ContentSource>(&self, config: &Config, source: S) -> Result<()> {
        let mirrors = config.filter_by_names(&self.names);

        if mirrors.is_empty() {
            let filter_desc = if self.names.is_empty() {
                "in the config".to_string()
            } else {
                format!("named {:?}", self.names)
            };
            println!(
                "{}",
                format!("No mirrors found {filter_desc}").yellow()
            );
            return Ok(());
        }

        println!(
            "{}",
            format!("Syncing {} mirrors...", mirrors.len()).green()
        );

        let fetcher = MirrorFetcher::new(source).with_observer(print_outcome);
        let mut errors = Vec::new();
        let mut successful = 0;

        for mirror in &mirrors {
            match fetcher.fetch_mirror(mirror).await {
                Ok(report) if report.root_failed() => {
                    print_summary(&report);
                    let reason = report
                        .failures()
                        .next()
                        .map(|(_, failure)| failure.to_string())
                        .unwrap_or_default();
                    errors.push((mirror.name().to_string(), anyhow::anyhow!(reason)));
                }
                Ok(report) => {
                    print_summary(&report);
                    successful += 1;
                }
                Err(e) => {
                    eprintln!("{}", format!("Error: {e:#}").red());
                    errors.push((mirror.name().to_string(), e));
                }
            }
        }

        // Report summary
        if errors.is_empty() {
            println!("{}", "Done syncing mirrors".green());
        } else {
            println!(
                "{}",
                format!(
                    "Completed with {} successful, {} failed",
                    successful,
                    errors.len()
                )
                .yellow()
            );

            // If all operations failed, return an error to propagate to main
            if successful == 0 {
                return Err(anyhow::anyhow!(
                    "All sync operations failed. First error ({}): {}",
                    errors[0].0,
                    errors[0].1
                ));
            }
        }

        Ok(())
    }
}

#[async_trait]
impl Command for SyncCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let client = context.github_client()?;
        self.execute_with(&context.config, client).await
    }
}
