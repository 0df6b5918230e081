//! bumpbot - automated dependency-update merge requests for GitLab
//!
//! CLI binary around the publisher library.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "bumpbot")]
#[command(about = "Automated dependency-update merge requests for GitLab")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish a dependency-update merge request
    Publish {
        /// Repository path, including nested groups (e.g. group/project)
        #[arg(long)]
        repo: String,

        /// Update plan JSON file
        #[arg(long)]
        plan: PathBuf,

        /// GitLab host for self-hosted instances
        #[arg(long)]
        host: Option<String>,

        /// Dry run - show what would be done without making changes
        #[arg(long)]
        dry_run: bool,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test authentication
    Test {
        /// GitLab host for self-hosted instances
        #[arg(long)]
        host: Option<String>,
    },
    /// Show authentication setup instructions
    Setup,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Publish {
            repo,
            plan,
            host,
            dry_run,
        } => {
            cli::run_publish(&repo, host.as_deref(), &plan, dry_run).await?;
        }
        Commands::Auth { action } => match action {
            AuthAction::Test { host } => {
                cli::run_auth("test", host.as_deref()).await?;
            }
            AuthAction::Setup => {
                cli::run_auth("setup", None).await?;
            }
        },
    }

    Ok(())
}
