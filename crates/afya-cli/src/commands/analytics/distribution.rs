//! Program distribution command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use afya_rest::resources::Analytics;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct DistributionArgs {}

pub async fn run(_args: DistributionArgs, server: Option<&str>) -> Result<()> {
    let client = session::rest_client(server)?;
    session::require_signed_in(&client)?;

    let distribution = Analytics::new(client)
        .program_distribution()
        .await
        .context("Failed to fetch program distribution")?;

    if distribution.program_names.is_empty() {
        eprintln!("{}", "No programs found.".dimmed());
        return Ok(());
    }

    for (name, count) in distribution
        .program_names
        .iter()
        .zip(&distribution.client_counts)
    {
        output::field(name, &count.to_string());
    }

    Ok(())
}
