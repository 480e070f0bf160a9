//! List programs command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use afya_rest::resources::Programs;

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

    let programs = Programs::new(client)
        .list()
        .await
        .context("Failed to list programs")?;

    if programs.is_empty() {
        eprintln!("{}", "No programs found.".dimmed());
        return Ok(());
    }

    for record in &programs {
        if args.pretty {
            output::json_pretty(record)?;
        } else {
            output::json(record)?;
        }
    }

    Ok(())
}
