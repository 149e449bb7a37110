//! Updaters CLI - check for and install new AppImage releases

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use updaters_core::types::GITHUB_API;
use updaters_core::{App, GithubClient};

#[derive(Parser)]
#[command(name = "updaters")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the GitHub API
    #[arg(long, global = true, env = "UPDATERS_GITHUB_API", default_value = GITHUB_API)]
    api_base: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the latest release of an application (zen, teams)
    Latest {
        /// Application name
        app: App,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether the installed version is the latest
    Check {
        /// Application name
        app: App,

        /// Installed version (probed from the binary when omitted)
        #[arg(long)]
        current: Option<String>,
    },

    /// Download the latest AppImage
    Download {
        /// Application name
        app: App,

        /// Directory to save the AppImage in
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Installed version (probed from the binary when omitted)
        #[arg(long)]
        current: Option<String>,

        /// Download even if the installed version is up to date
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "updaters=debug,updaters_core=debug"
    } else {
        "updaters=info,updaters_core=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = GithubClient::with_api_base(cli.api_base)?;

    match cli.command {
        Commands::Latest { app, json } => commands::latest(&client, app, json).await,

        Commands::Check { app, current } => commands::check(&client, app, current).await,

        Commands::Download {
            app,
            output_dir,
            current,
            force,
        } => commands::download(&client, app, &output_dir, current, force).await,
    }
}
