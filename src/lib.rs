//! gh-mirror - mirror a GitHub repository's file tree to local disk
//!
//! The [`mirror`] module walks a repository through the contents API and
//! writes every file it finds; [`completion`] turns local files into context
//! for a text-completion collaborator.

pub mod commands;
pub mod completion;
pub mod config;
pub mod constants;
pub mod mirror;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::{Config, MirrorSpec};
pub use mirror::{ContentSource, FetchReport, MirrorFetcher, Outcome};
pub use mirror_github::{Credentials, GitHubClient};

/// Load the default config file, falling back to an empty config when absent
pub fn load_default_config() -> anyhow::Result<Config> {
    Config::load_or_default(constants::config::DEFAULT_CONFIG_FILE)
}
