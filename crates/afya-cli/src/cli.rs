//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::activity::ActivityArgs;
use crate::commands::analytics::AnalyticsCommand;
use crate::commands::auth::AuthCommand;
use crate::commands::clients::ClientsCommand;
use crate::commands::enroll::EnrollArgs;
use crate::commands::programs::ProgramsCommand;

/// Health information system CLI.
#[derive(Parser, Debug)]
#[command(name = "afya")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Backend server URL (overrides AFYA_SERVER_URL)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Account and session operations
    Auth(AuthCommand),

    /// Client registry operations
    Clients(ClientsCommand),

    /// Health program operations
    Programs(ProgramsCommand),

    /// Enroll a client into a program
    Enroll(EnrollArgs),

    /// Dashboard analytics
    Analytics(AnalyticsCommand),

    /// Activity feed
    Activity(ActivityArgs),
}
