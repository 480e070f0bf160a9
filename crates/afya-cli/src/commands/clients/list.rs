//! List clients command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use afya_rest::resources::Clients;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ListArgs, server: Option<&str>) -> Result<()> {
    let client = session::rest_client(server)?;
    session::require_signed_in(&client)?;

    let clients = Clients::new(client)
        .list()
        .await
        .context("Failed to list clients")?;

    if clients.is_empty() {
        eprintln!("{}", "No clients found.".dimmed());
        return Ok(());
    }

    for record in &clients {
        if args.pretty {
            output::json_pretty(record)?;
        } else {
            output::json(record)?;
        }
    }

    Ok(())
}
