//! Whoami command implementation.

use anyhow::{bail, Result};
use clap::Args;

use afya_core::SessionState;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs, server: Option<&str>) -> Result<()> {
    let controller = session::controller(server)?;

    // Asks the backend, so stale tokens report as signed out
    match controller.check().await {
        SessionState::Authenticated { user } => {
            output::field("Name", &user.name);
            output::field("Email", &user.email);
            Ok(())
        }
        _ => bail!("Not signed in. Run 'afya auth login' first."),
    }
}
