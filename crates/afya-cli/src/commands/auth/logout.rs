//! Logout command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs, server: Option<&str>) -> Result<()> {
    let controller = session::controller(server)?;

    eprintln!("{}", "Signing out...".dimmed());

    // Local tokens are cleared even when the revoke call fails
    controller.logout().await;

    output::success("Signed out");

    Ok(())
}
