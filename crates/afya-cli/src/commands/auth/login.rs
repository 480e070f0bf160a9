//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session;
use crate::validate;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email address
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: LoginArgs, server: Option<&str>) -> Result<()> {
    validate::not_blank("email", &args.email)?;
    validate::not_blank("password", &args.password)?;

    let controller = session::controller(server)?;

    eprintln!("{}", "Signing in...".dimmed());

    let user = controller
        .login(&args.email, &args.password)
        .await
        .context("Failed to sign in")?;

    output::success("Signed in successfully");
    println!();
    output::field("Name", &user.name);
    output::field("Email", &user.email);

    Ok(())
}
