//! Analytics subcommand implementations.

mod distribution;
mod monthly_enrollments;
mod monthly_totals;
mod overview;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct AnalyticsCommand {
    #[command(subcommand)]
    pub command: AnalyticsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AnalyticsSubcommand {
    /// Dashboard counters with growth percentages
    Overview(overview::OverviewArgs),

    /// Enrollment counts by year and month
    MonthlyEnrollments(monthly_enrollments::MonthlyEnrollmentsArgs),

    /// New clients and programs per month
    MonthlyTotals(monthly_totals::MonthlyTotalsArgs),

    /// Enrolled client counts per program
    Distribution(distribution::DistributionArgs),
}

pub async fn handle(cmd: AnalyticsCommand, server: Option<&str>) -> Result<()> {
    match cmd.command {
        AnalyticsSubcommand::Overview(args) => overview::run(args, server).await,
        AnalyticsSubcommand::MonthlyEnrollments(args) => {
            monthly_enrollments::run(args, server).await
        }
        AnalyticsSubcommand::MonthlyTotals(args) => monthly_totals::run(args, server).await,
        AnalyticsSubcommand::Distribution(args) => distribution::run(args, server).await,
    }
}
