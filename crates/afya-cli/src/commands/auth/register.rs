//! Account registration command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session;
use crate::validate;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// First name
    #[arg(long)]
    pub first_name: String,

    /// Last name
    #[arg(long)]
    pub last_name: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: RegisterArgs, server: Option<&str>) -> Result<()> {
    validate::not_blank("first_name", &args.first_name)?;
    validate::not_blank("email", &args.email)?;
    validate::not_blank("password", &args.password)?;

    let controller = session::controller(server)?;

    eprintln!("{}", "Registering account...".dimmed());

    controller
        .register(&args.first_name, &args.last_name, &args.email, &args.password)
        .await
        .context("Failed to register account")?;

    output::success("Account registered");
    eprintln!("{}", "Run 'afya auth login' to sign in.".dimmed());

    Ok(())
}
