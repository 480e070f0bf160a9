//! Update program command implementation.

use anyhow::{Context, Result};
use clap::Args;
use uuid::Uuid;

use afya_core::model::ProgramUpdate;
use afya_rest::resources::Programs;

use crate::output;
use crate::session;
use crate::validate;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Program identifier
    pub uuid: Uuid,

    /// Replacement description
    #[arg(long)]
    pub description: String,
}

pub async fn run(args: UpdateArgs, server: Option<&str>) -> Result<()> {
    validate::not_blank("description", &args.description)?;

    let client = session::rest_client(server)?;
    session::require_signed_in(&client)?;

    let update = ProgramUpdate {
        description: args.description,
    };

    let updated = Programs::new(client)
        .update(args.uuid, &update)
        .await
        .context("Failed to update program")?;

    output::success("Program updated");
    println!();
    output::field("Description", &updated.description);

    Ok(())
}
