//! Backend-owned record types.
//!
//! Field names and shapes mirror the backend's JSON exactly; serde does the
//! renaming where Rust and the wire disagree. All identifiers the backend
//! routes on are UUIDs, except activity feed entries whose identifiers are
//! opaque backend strings.

mod activity;
mod client;
mod enrollment;
mod program;
mod stats;
mod user;

pub use activity::{Activity, ActivityKind, ActivityPage, ActivityQuery, ActivityUser};
pub use client::{Client, EnrolledProgram, NewClient};
pub use enrollment::{Enrollment, NewEnrollment};
pub use program::{NewProgram, Program, ProgramClient, ProgramUpdate};
pub use stats::{
    ActivePrograms, MonthlyEnrollments, MonthlyTotals, ProgramDistribution, RecentEnrollments,
    TotalClients,
};
pub use user::UserProfile;
