//! Monthly enrollments command implementation.

use anyhow::{Context, Result};
use clap::Args;

use afya_rest::resources::Analytics;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct MonthlyEnrollmentsArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: MonthlyEnrollmentsArgs, server: Option<&str>) -> Result<()> {
    let client = session::rest_client(server)?;
    session::require_signed_in(&client)?;

    let monthly = Analytics::new(client)
        .monthly_enrollments()
        .await
        .context("Failed to fetch monthly enrollments")?;

    if args.pretty {
        output::json_pretty(&monthly)?;
    } else {
        output::json(&monthly)?;
    }

    Ok(())
}
