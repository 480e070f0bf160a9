//! Get client command implementation.

use anyhow::{Context, Result};
use clap::Args;
use uuid::Uuid;

use afya_rest::resources::Clients;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Client identifier
    pub uuid: Uuid,
}

pub async fn run(args: GetArgs, server: Option<&str>) -> Result<()> {
    let client = session::rest_client(server)?;
    session::require_signed_in(&client)?;

    let record = Clients::new(client)
        .get(args.uuid)
        .await
        .context("Failed to fetch client")?;

    output::json_pretty(&record)?;

    Ok(())
}
