//! Enrollment records linking clients to programs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An enrollment of one client into one program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    /// Backend identifier.
    pub uuid: Uuid,

    /// The enrolled client.
    pub client: Uuid,

    /// The program enrolled into.
    pub program: Uuid,

    /// Enrollment status.
    pub status: String,

    /// When the enrollment was made.
    pub enrolled_at: DateTime<Utc>,
}

/// The payload for enrolling a client into a program.
#[derive(Debug, Clone, Serialize)]
pub struct NewEnrollment {
    /// The client to enroll.
    pub client: Uuid,

    /// The program to enroll into.
    pub program: Uuid,
}
