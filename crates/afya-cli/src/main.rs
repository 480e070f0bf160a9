//! afya - CLI for a health information system backend.
//!
//! This is a thin wrapper over the afya libraries, intended for driving the
//! dashboard backend from scripts and for manual exploration.

mod cli;
mod commands;
mod config;
mod output;
mod session;
mod storage;
mod validate;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{activity, analytics, auth, clients, enroll, programs};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let server = cli.server.as_deref();
    match cli.command {
        Commands::Auth(cmd) => auth::handle(cmd, server).await,
        Commands::Clients(cmd) => clients::handle(cmd, server).await,
        Commands::Programs(cmd) => programs::handle(cmd, server).await,
        Commands::Enroll(args) => enroll::run(args, server).await,
        Commands::Analytics(cmd) => analytics::handle(cmd, server).await,
        Commands::Activity(args) => activity::run(args, server).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
