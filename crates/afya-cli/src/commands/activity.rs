//! Activity feed command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use afya_core::model::ActivityQuery;
use afya_rest::resources::Activities;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ActivityArgs {
    /// Maximum number of entries to return
    #[arg(long)]
    pub limit: Option<u32>,

    /// Restrict to an entity type (repeatable)
    #[arg(long = "entity-type")]
    pub entity_types: Vec<String>,

    /// Restrict to one entity's history
    #[arg(long)]
    pub entity_uuid: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ActivityArgs, server: Option<&str>) -> Result<()> {
    let client = session::rest_client(server)?;
    session::require_signed_in(&client)?;

    let query = ActivityQuery {
        limit: args.limit,
        entity_types: args.entity_types,
        entity_uuid: args.entity_uuid,
    };

    let page = Activities::new(client)
        .list(&query)
        .await
        .context("Failed to fetch activity")?;

    if page.results.is_empty() {
        eprintln!("{}", "No activity found.".dimmed());
        return Ok(());
    }

    for entry in &page.results {
        if args.pretty {
            output::json_pretty(entry)?;
        } else {
            output::json(entry)?;
        }
    }

    if page.count > page.results.len() as u64 {
        eprintln!();
        eprintln!(
            "{}",
            format!("Showing {} of {} entries.", page.results.len(), page.count).dimmed()
        );
    }

    Ok(())
}
