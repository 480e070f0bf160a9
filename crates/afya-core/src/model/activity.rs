//! Activity feed records.
//!
//! Unlike the registry records, activity identifiers are opaque strings
//! minted by the feed backend, not UUIDs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of event an activity entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// A client was registered.
    Registration,
    /// A client was enrolled into a program.
    Enrollment,
    /// A record was edited.
    Update,
    /// The system raised an alert.
    Alert,
    /// A user signed in.
    Login,
    /// A user signed out.
    Logout,
}

/// One entry in the activity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Feed identifier.
    pub id: String,

    /// What happened.
    #[serde(rename = "type")]
    pub kind: ActivityKind,

    /// Short headline.
    pub title: String,

    /// Human-readable description.
    pub description: String,

    /// When it happened.
    pub timestamp: DateTime<Utc>,

    /// The user who acted, when attributable.
    pub user: Option<ActivityUser>,

    /// The kind of entity acted on ("client", "program").
    pub entity_type: Option<String>,

    /// The identifier of the entity acted on.
    pub entity_uuid: Option<String>,

    /// Free-form extra data attached by the backend.
    pub metadata: Option<serde_json::Value>,
}

/// The acting user as embedded in an activity entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityUser {
    /// Feed identifier of the user.
    pub uuid: String,

    /// Display name.
    pub name: String,

    /// Email address.
    pub email: String,

    /// Avatar URL, if the user has one.
    pub avatar: Option<String>,
}

/// Filters for an activity feed fetch.
///
/// The default query fetches the whole feed, newest first. `entity_types`
/// repeats on the wire, one `entity_type` pair per value.
#[derive(Debug, Clone, Default)]
pub struct ActivityQuery {
    /// Maximum number of entries to return.
    pub limit: Option<u32>,

    /// Restrict to entries about these entity kinds ("client", "program").
    pub entity_types: Vec<String>,

    /// Restrict to the trail of one entity.
    pub entity_uuid: Option<String>,
}

impl ActivityQuery {
    /// Returns true when no filter is set.
    pub fn is_empty(&self) -> bool {
        self.limit.is_none() && self.entity_types.is_empty() && self.entity_uuid.is_none()
    }
}

/// One page of the activity feed.
///
/// The feed paginates in the backend's envelope style: results plus a total
/// count and absolute URLs for the neighbouring pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityPage {
    /// Entries on this page, newest first.
    pub results: Vec<Activity>,

    /// Total entries across all pages.
    pub count: u64,

    /// URL of the next page, if any.
    pub next: Option<String>,

    /// URL of the previous page, if any.
    pub previous: Option<String>,
}
