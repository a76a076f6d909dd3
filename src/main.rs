use anyhow::Result;
use clap::{Parser, Subcommand};
use gh_mirror::commands::validators;
use gh_mirror::commands::*;
use gh_mirror::config::{Config, resolve_credentials};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gh-mirror")]
#[command(about = "Mirror a GitHub repository's file tree to local disk")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// GitHub username (falls back to the config, then GITHUB_USER)
    #[arg(short, long, global = true)]
    user: Option<String>,

    /// GitHub personal access token (falls back to GITHUB_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download a repository's files to a local directory
    Fetch {
        /// Repository as owner/repo or a GitHub URL
        repository: String,

        /// Local directory to write into (defaults to the repository name)
        #[arg(short, long)]
        target: Option<String>,

        /// Print the fetch report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch every mirror listed in the config
    Sync {
        /// Specific mirror names to sync (if not provided, syncs all mirrors)
        names: Vec<String>,
    },

    /// Send a query with local files as context to the completion endpoint
    Ask {
        /// The query to send
        query: String,

        /// File or directory to include as context (can be specified multiple times)
        #[arg(long = "context", value_name = "PATH")]
        context: Vec<PathBuf>,

        /// Completion endpoint URL (overrides completion.endpoint in the config)
        #[arg(long)]
        endpoint: Option<String>,

        /// Maximum tokens to generate
        #[arg(long)]
        max_tokens: Option<u32>,

        /// Sampling temperature
        #[arg(long)]
        temperature: Option<f32>,

        /// Print the request instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // An explicit --config must exist; the default file is optional
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => gh_mirror::load_default_config()?,
    };

    match cli.command {
        Commands::Fetch {
            repository,
            target,
            json,
        } => {
            validators::validate_target_directory(&target)?;

            let credentials = resolve_credentials(cli.user, cli.token, &config)?;
            let context = CommandContext::new(config, Some(credentials));
            FetchCommand {
                reference: repository,
                target,
                json,
            }
            .execute(&context)
            .await?;
        }
        Commands::Sync { names } => {
            validators::validate_mirror_names(&names)?;

            let credentials = resolve_credentials(cli.user, cli.token, &config)?;
            let context = CommandContext::new(config, Some(credentials));
            SyncCommand { names }.execute(&context).await?;
        }
        Commands::Ask {
            query,
            context,
            endpoint,
            max_tokens,
            temperature,
            dry_run,
        } => {
            // A dry run never talks to the network, so credentials are optional
            let credentials = resolve_credentials(cli.user, cli.token, &config);
            let credentials = if dry_run {
                credentials.ok()
            } else {
                Some(credentials?)
            };

            let command_context = CommandContext::new(config, credentials);
            AskCommand {
                query,
                context_paths: context,
                endpoint,
                max_tokens,
                temperature,
                dry_run,
            }
            .execute(&command_context)
            .await?;
        }
    }

    Ok(())
}
