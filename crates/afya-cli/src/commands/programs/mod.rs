//! Program subcommand implementations.

mod create;
mod get;
mod list;
mod update;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct ProgramsCommand {
    #[command(subcommand)]
    pub command: ProgramsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProgramsSubcommand {
    /// List all health programs
    List(list::ListArgs),

    /// Fetch a single program with its enrolled clients
    Get(get::GetArgs),

    /// Create a new program
    Create(create::CreateArgs),

    /// Update a program's description
    Update(update::UpdateArgs),
}

pub async fn handle(cmd: ProgramsCommand, server: Option<&str>) -> Result<()> {
    match cmd.command {
        ProgramsSubcommand::List(args) => list::run(args, server).await,
        ProgramsSubcommand::Get(args) => get::run(args, server).await,
        ProgramsSubcommand::Create(args) => create::run(args, server).await,
        ProgramsSubcommand::Update(args) => update::run(args, server).await,
    }
}
