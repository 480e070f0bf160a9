//! Auth subcommand implementations.

mod login;
mod logout;
mod register;
mod whoami;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Sign in and store the session tokens
    Login(login::LoginArgs),

    /// Sign out and revoke the stored tokens
    Logout(logout::LogoutArgs),

    /// Create a new account
    Register(register::RegisterArgs),

    /// Display the signed-in user
    Whoami(whoami::WhoamiArgs),
}

pub async fn handle(cmd: AuthCommand, server: Option<&str>) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Login(args) => login::run(args, server).await,
        AuthSubcommand::Logout(args) => logout::run(args, server).await,
        AuthSubcommand::Register(args) => register::run(args, server).await,
        AuthSubcommand::Whoami(args) => whoami::run(args, server).await,
    }
}
