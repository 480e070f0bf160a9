//! Create program command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use afya_core::model::NewProgram;
use afya_rest::resources::Programs;

use crate::output;
use crate::session;
use crate::validate;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Program name
    #[arg(long)]
    pub name: String,

    /// Program description
    #[arg(long)]
    pub description: String,
}

pub async fn run(args: CreateArgs, server: Option<&str>) -> Result<()> {
    validate::not_blank("name", &args.name)?;
    validate::not_blank("description", &args.description)?;

    let client = session::rest_client(server)?;
    session::require_signed_in(&client)?;

    let new = NewProgram {
        name: args.name,
        description: args.description,
    };

    eprintln!("{}", "Creating program...".dimmed());

    let created = Programs::new(client)
        .create(&new)
        .await
        .context("Failed to create program")?;

    output::success("Program created");
    println!();
    output::field("UUID", &created.uuid.to_string());
    output::field("Name", &created.name);

    Ok(())
}
