//! Dashboard analytics endpoints.

use tracing::instrument;

use afya_core::Result;
use afya_core::model::{
    ActivePrograms, MonthlyEnrollments, MonthlyTotals, ProgramDistribution, RecentEnrollments,
    TotalClients,
};

use crate::client::RestClient;
use crate::endpoints;

/// Typed access to the analytics endpoints.
///
/// All read-only; every counter pairs a value with its growth against the
/// previous period.
#[derive(Debug, Clone)]
pub struct Analytics {
    client: RestClient,
}

impl Analytics {
    /// Create a service over the given client.
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Total registered clients.
    #[instrument(skip(self))]
    pub async fn total_clients(&self) -> Result<TotalClients> {
        self.client.get(endpoints::ANALYTICS_TOTAL_CLIENTS).await
    }

    /// Active program count.
    #[instrument(skip(self))]
    pub async fn active_programs(&self) -> Result<ActivePrograms> {
        self.client.get(endpoints::ANALYTICS_ACTIVE_PROGRAMS).await
    }

    /// Enrollments made in the last 30 days.
    #[instrument(skip(self))]
    pub async fn recent_enrollments(&self) -> Result<RecentEnrollments> {
        self.client.get(endpoints::ANALYTICS_ENROLLMENTS).await
    }

    /// Enrollment counts keyed by year and month.
    #[instrument(skip(self))]
    pub async fn monthly_enrollments(&self) -> Result<MonthlyEnrollments> {
        self.client
            .get(endpoints::ANALYTICS_MONTHLY_ENROLLMENTS)
            .await
    }

    /// Month-aligned client and program series for the overview chart.
    #[instrument(skip(self))]
    pub async fn monthly_totals(&self) -> Result<MonthlyTotals> {
        self.client.get(endpoints::ANALYTICS_MONTHLY_TOTALS).await
    }

    /// Client counts per program.
    #[instrument(skip(self))]
    pub async fn program_distribution(&self) -> Result<ProgramDistribution> {
        self.client
            .get(endpoints::ANALYTICS_PROGRAM_DISTRIBUTION)
            .await
    }
}
