//! Client subcommand implementations.

mod delete;
mod get;
mod list;
mod register;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct ClientsCommand {
    #[command(subcommand)]
    pub command: ClientsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ClientsSubcommand {
    /// List all registered clients
    List(list::ListArgs),

    /// Fetch a single client
    Get(get::GetArgs),

    /// Register a new client
    Register(register::RegisterArgs),

    /// Delete a client
    Delete(delete::DeleteArgs),
}

pub async fn handle(cmd: ClientsCommand, server: Option<&str>) -> Result<()> {
    match cmd.command {
        ClientsSubcommand::List(args) => list::run(args, server).await,
        ClientsSubcommand::Get(args) => get::run(args, server).await,
        ClientsSubcommand::Register(args) => register::run(args, server).await,
        ClientsSubcommand::Delete(args) => delete::run(args, server).await,
    }
}
