//! Dashboard analytics payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Total registered clients with growth relative to the previous period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalClients {
    /// Number of registered clients.
    pub total_clients: u64,

    /// Growth over the previous period, in percent.
    pub growth_percentage: f64,
}

/// Active program count with growth relative to the previous period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivePrograms {
    /// Number of active programs.
    pub active_programs: u64,

    /// Growth over the previous period, in percent.
    pub growth_percentage: f64,
}

/// Enrollments made in the last 30 days with growth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentEnrollments {
    /// Enrollments in the window.
    pub enrollments: u64,

    /// Growth over the previous window, in percent.
    pub growth_percentage: f64,
}

/// Enrollment counts keyed by year, then by month name.
///
/// The backend sends a nested object rather than an array; `BTreeMap` keeps
/// the years in order when re-serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlyEnrollments(pub BTreeMap<String, BTreeMap<String, u64>>);

impl MonthlyEnrollments {
    /// Returns the count for a given year and month, if present.
    pub fn count(&self, year: &str, month: &str) -> Option<u64> {
        self.0.get(year).and_then(|months| months.get(month)).copied()
    }

    /// Returns the years covered, in ascending order.
    pub fn years(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Parallel month/client/program series for the dashboard chart.
///
/// The three vectors are index-aligned: `clients[i]` and `programs[i]` are
/// the counts for `months[i]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Month labels.
    pub months: Vec<String>,

    /// New clients per month.
    pub clients: Vec<u64>,

    /// New programs per month.
    pub programs: Vec<u64>,
}

/// Client counts per program for the distribution chart.
///
/// Index-aligned like [`MonthlyTotals`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramDistribution {
    /// Program names.
    pub program_names: Vec<String>,

    /// Enrolled client count per program.
    pub client_counts: Vec<u64>,
}
