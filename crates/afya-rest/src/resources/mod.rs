//! Typed access to the backend's domain endpoints.
//!
//! Each service is a thin veneer over [`RestClient`](crate::RestClient):
//! it knows its endpoint paths and payload types and nothing else. Session
//! concerns (missing or rejected tokens) surface through the client's
//! error taxonomy, and cache invalidation is the caller's business via the
//! event bus.

mod activities;
mod analytics;
mod clients;
mod enrollments;
mod programs;

pub use activities::Activities;
pub use analytics::Analytics;
pub use clients::Clients;
pub use enrollments::Enrollments;
pub use programs::Programs;
