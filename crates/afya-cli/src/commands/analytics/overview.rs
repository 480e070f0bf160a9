//! Analytics overview command implementation.

use anyhow::{Context, Result};
use clap::Args;

use afya_rest::resources::Analytics;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct OverviewArgs {}

pub async fn run(_args: OverviewArgs, server: Option<&str>) -> Result<()> {
    let client = session::rest_client(server)?;
    session::require_signed_in(&client)?;

    let analytics = Analytics::new(client);

    let totals = analytics
        .total_clients()
        .await
        .context("Failed to fetch client totals")?;
    let active = analytics
        .active_programs()
        .await
        .context("Failed to fetch active programs")?;
    let recent = analytics
        .recent_enrollments()
        .await
        .context("Failed to fetch recent enrollments")?;

    output::field(
        "Total clients",
        &format!("{} ({:+.1}%)", totals.total_clients, totals.growth_percentage),
    );
    output::field(
        "Active programs",
        &format!("{} ({:+.1}%)", active.active_programs, active.growth_percentage),
    );
    output::field(
        "Enrollments (30d)",
        &format!("{} ({:+.1}%)", recent.enrollments, recent.growth_percentage),
    );

    Ok(())
}
