//! Monthly totals command implementation.

use anyhow::{Context, Result};
use clap::Args;

use afya_rest::resources::Analytics;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct MonthlyTotalsArgs {}

pub async fn run(_args: MonthlyTotalsArgs, server: Option<&str>) -> Result<()> {
    let client = session::rest_client(server)?;
    session::require_signed_in(&client)?;

    let totals = Analytics::new(client)
        .monthly_totals()
        .await
        .context("Failed to fetch monthly totals")?;

    for (i, month) in totals.months.iter().enumerate() {
        let clients = totals.clients.get(i).copied().unwrap_or(0);
        let programs = totals.programs.get(i).copied().unwrap_or(0);
        output::field(month, &format!("{} clients, {} programs", clients, programs));
    }

    Ok(())
}
