//! Client registry records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Backend identifier.
    pub uuid: Uuid,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// Date of birth.
    pub dob: NaiveDate,

    /// Contact phone number.
    pub phone_number: String,

    /// County of residence.
    pub county: String,

    /// Sub-county of residence.
    pub sub_county: String,

    /// Self-reported gender.
    pub gender: String,

    /// Age in years, computed server-side from `dob`.
    pub age: u32,

    /// Programs the client is enrolled in.
    #[serde(default)]
    pub programs: Vec<EnrolledProgram>,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// Who created the record.
    pub created_by: String,
}

impl Client {
    /// Returns the client's full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A program as embedded in a client record.
///
/// Carries the enrollment timestamp in place of the program's own audit
/// fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrolledProgram {
    /// Backend identifier of the program.
    pub uuid: Uuid,

    /// Program name.
    pub name: String,

    /// Program description.
    pub description: String,

    /// Program status.
    pub status: String,

    /// When the client was enrolled.
    pub enrolled_at: DateTime<Utc>,
}

/// The payload for registering a new client.
#[derive(Debug, Clone, Serialize)]
pub struct NewClient {
    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// Date of birth.
    pub dob: NaiveDate,

    /// Contact phone number.
    pub phone_number: String,

    /// County of residence.
    pub county: String,

    /// Sub-county of residence.
    pub sub_county: String,

    /// Self-reported gender.
    pub gender: String,
}
