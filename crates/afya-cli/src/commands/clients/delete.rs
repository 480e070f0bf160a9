//! Delete client command implementation.

use anyhow::{Context, Result};
use clap::Args;
use uuid::Uuid;

use afya_rest::resources::Clients;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Client identifier
    pub uuid: Uuid,
}

pub async fn run(args: DeleteArgs, server: Option<&str>) -> Result<()> {
    let client = session::rest_client(server)?;
    session::require_signed_in(&client)?;

    Clients::new(client)
        .delete(args.uuid)
        .await
        .context("Failed to delete client")?;

    output::success("Client deleted");

    Ok(())
}
