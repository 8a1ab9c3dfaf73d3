//! Launchdeck admin console.
//!
//! Terminal front end for the rocket-launch admin backend. One subcommand
//! group per admin page:
//!
//! - `rockets` / `launches` / `news` / `bases` / `companies` -- CRUD
//! - `launches sync` - pull fresh launch data from the upstream source
//! - `stats` - dashboard counters
//!
//! Create and update take their payload as JSON (`--data '{"name": ...}'`);
//! presence validation runs client-side before anything is sent. Deletes
//! prompt for confirmation unless `--yes` is passed.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launchdeck_client::{ClientConfig, LaunchdeckApi};
use launchdeck_view::{ResourcePage, StatsPage};

use commands::{CrudCommand, LaunchCommand};

/// Admin console for the Launchdeck backend.
#[derive(Parser)]
#[command(name = "launchdeck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL (overrides `LAUNCHDECK_API_BASE_URL`)
    #[arg(global = true, long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage rockets
    Rockets {
        #[command(subcommand)]
        action: CrudCommand,
    },

    /// Manage rocket launches
    Launches {
        #[command(subcommand)]
        action: LaunchCommand,
    },

    /// Manage news articles
    News {
        #[command(subcommand)]
        action: CrudCommand,
    },

    /// Manage launch bases
    Bases {
        #[command(subcommand)]
        action: CrudCommand,
    },

    /// Manage companies
    Companies {
        #[command(subcommand)]
        action: CrudCommand,
    },

    /// Show dashboard counters
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "launchdeck=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = match cli.base_url {
        Some(base_url) => ClientConfig::new(base_url),
        None => ClientConfig::from_env(),
    };
    let api = LaunchdeckApi::new(&config);

    match cli.command {
        Commands::Rockets { action } => {
            commands::run_crud(ResourcePage::new(api.rockets()), action).await
        }
        Commands::Launches { action } => match action {
            LaunchCommand::Crud(action) => {
                commands::run_crud(ResourcePage::new(api.launches()), action).await
            }
            LaunchCommand::Sync { limit } => {
                commands::run_sync(ResourcePage::new(api.launches()), limit).await
            }
        },
        Commands::News { action } => {
            commands::run_crud(ResourcePage::new(api.news()), action).await
        }
        Commands::Bases { action } => {
            commands::run_crud(ResourcePage::new(api.launch_bases()), action).await
        }
        Commands::Companies { action } => {
            commands::run_crud(ResourcePage::new(api.companies()), action).await
        }
        Commands::Stats => commands::run_stats(StatsPage::new(api.stats())).await,
    }
}
