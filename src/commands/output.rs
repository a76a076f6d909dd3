//! Console rendering shared by the commands

use crate::mirror::{FetchReport, Outcome};
use colored::*;
use std::path::Path;

/// One line per recorded outcome, errors on stderr
///
/// Entries refused before reaching disk have no local path and are shown by
/// their repository path.
pub fn print_outcome(local_path: Option<&Path>, outcome: &Outcome) {
    let shown = match local_path {
        Some(path) => path.display().to_string(),
        None => outcome.remote_path().to_string(),
    };

    match outcome {
        Outcome::Written { bytes, .. } => {
            println!("{} {} ({} bytes)", "Downloaded:".green(), shown, bytes)
        }
        Outcome::Directory { .. } => println!("{} {}", "Created:".green(), shown),
        Outcome::Skipped { kind, .. } => {
            println!("{} {} ({})", "Skipped:".yellow(), shown, kind)
        }
        Outcome::Failed(failure) => match local_path {
            Some(path) => eprintln!(
                "{}",
                format!("Error: {} -> {}", failure, path.display()).red()
            ),
            None => eprintln!("{}", format!("Error: {}", failure).red()),
        },
    }
}

/// Summary line for a finished fetch
pub fn print_summary(report: &FetchReport) {
    let summary = report.summary();
    let label = format!("{}/{}", report.owner, report.repo);

    if report.is_complete() {
        println!(
            "{} | {}",
            label.cyan().bold(),
            format!(
                "{} files ({} bytes), {} directories written to {}",
                summary.files,
                summary.bytes,
                summary.directories,
                report.root.display()
            )
            .green()
        );
    } else {
        println!(
            "{} | {}",
            label.cyan().bold(),
            format!(
                "Completed with {} files written, {} failed",
                summary.files, summary.failed
            )
            .yellow()
        );
    }
}
