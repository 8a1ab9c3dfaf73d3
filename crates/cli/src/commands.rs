//! Command execution: one generic CRUD runner shared by every resource
//! page, plus the launch sync and dashboard one-offs.

use std::io::{self, Write};

use anyhow::Context;
use clap::Subcommand;
use serde::de::DeserializeOwned;
use serde::Serialize;

use launchdeck_core::DbId;
use launchdeck_view::{LaunchesPage, ResourceOps, ResourcePage, StatsPage, StatsSource};

use crate::output::{self, Tabular};

/// CRUD actions shared by every resource subcommand.
#[derive(Subcommand)]
pub enum CrudCommand {
    /// List all records
    List,

    /// Show one record as JSON
    Get { id: DbId },

    /// Create a record from a JSON payload
    Create {
        /// JSON payload, e.g. '{"name": "Electron", ...}'
        #[arg(long)]
        data: String,
    },

    /// Update a record from a partial JSON payload
    Update {
        id: DbId,
        /// Partial JSON payload; omitted fields are left unchanged
        #[arg(long)]
        data: String,
    },

    /// Delete a record (asks for confirmation)
    Delete {
        id: DbId,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Launch actions: the shared CRUD surface plus the bulk sync.
#[derive(Subcommand)]
pub enum LaunchCommand {
    #[command(flatten)]
    Crud(CrudCommand),

    /// Pull fresh launch data from the upstream source
    Sync {
        /// Cap the number of records to ingest (backend default when omitted)
        #[arg(long)]
        limit: Option<u32>,
    },
}

/// Run one CRUD action against a resource page.
pub async fn run_crud<S>(mut page: ResourcePage<S>, command: CrudCommand) -> anyhow::Result<()>
where
    S: ResourceOps,
    S::Entity: Tabular + Serialize,
    S::Create: DeserializeOwned,
    S::Update: DeserializeOwned,
{
    match command {
        CrudCommand::List => {
            page.refresh().await;
            fail_on_error(page.error())?;
            output::print_table(page.records());
        }

        CrudCommand::Get { id } => {
            let entity = page.source().get_by_id(id).await?;
            println!("{}", serde_json::to_string_pretty(&entity)?);
        }

        CrudCommand::Create { data } => {
            let input: S::Create =
                serde_json::from_str(&data).context("payload is not valid JSON for this resource")?;
            page.submit_create(&input).await;
            fail_on_error(page.error())?;
            output::print_table(page.records());
        }

        CrudCommand::Update { id, data } => {
            let patch: S::Update =
                serde_json::from_str(&data).context("payload is not valid JSON for this resource")?;
            page.submit_update(id, &patch).await;
            fail_on_error(page.error())?;
            output::print_table(page.records());
        }

        CrudCommand::Delete { id, yes } => {
            page.request_delete(id);
            let confirmed = yes || confirm(&format!("Delete {} {id}?", S::RESOURCE))?;
            if !confirmed {
                page.cancel_delete();
                println!("Cancelled; nothing was sent.");
                return Ok(());
            }
            page.confirm_delete().await;
            fail_on_error(page.error())?;
            println!("Deleted {} {id}.", S::RESOURCE);
        }
    }
    Ok(())
}

/// Run the launch bulk sync and show the refreshed collection.
pub async fn run_sync(mut page: LaunchesPage, limit: Option<u32>) -> anyhow::Result<()> {
    let Some(outcome) = page.sync(limit).await else {
        anyhow::bail!(page.error().unwrap_or("sync failed").to_string());
    };
    println!("Synchronized {} launch records.", outcome.count);
    fail_on_error(page.error())?;
    output::print_table(page.records());
    Ok(())
}

/// Fetch and print the dashboard counters.
pub async fn run_stats<S: StatsSource>(mut page: StatsPage<S>) -> anyhow::Result<()> {
    page.refresh().await;
    fail_on_error(page.error())?;
    let Some(stats) = page.stats() else {
        anyhow::bail!("stats endpoint returned nothing");
    };

    println!("Rockets:           {}", stats.total_rockets);
    println!("Upcoming launches: {}", stats.upcoming_launches);
    println!("News articles:     {}", stats.news_articles);
    println!("Launch bases:      {}", stats.launch_bases);
    println!("Companies:         {}", stats.companies);
    Ok(())
}

/// Turn a page's inline error slot into a non-zero exit.
fn fail_on_error(error: Option<&str>) -> anyhow::Result<()> {
    match error {
        Some(message) => anyhow::bail!("{message}"),
        None => Ok(()),
    }
}

/// Ask a yes/no question on stdin. Anything but an explicit yes declines.
fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(
        line.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
