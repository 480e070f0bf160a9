//! Health program records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A health program.
///
/// List responses carry only the base fields; detail responses may add the
/// enrollment count and the enrolled clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    /// Backend identifier.
    pub uuid: Uuid,

    /// Program name.
    pub name: String,

    /// Program description.
    pub description: String,

    /// Program status.
    pub status: String,

    /// When the program was created.
    pub created_at: DateTime<Utc>,

    /// Who created the program.
    pub created_by: String,

    /// Number of enrolled clients, when the endpoint includes it.
    pub total_enrolled_clients: Option<u64>,

    /// Enrolled clients, when the endpoint includes them.
    pub clients: Option<Vec<ProgramClient>>,
}

/// A client as embedded in a program detail record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramClient {
    /// Backend identifier of the client.
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

    /// When the client record was created.
    pub created_at: DateTime<Utc>,
}

/// The payload for creating a program.
#[derive(Debug, Clone, Serialize)]
pub struct NewProgram {
    /// Program name.
    pub name: String,

    /// Program description.
    pub description: String,
}

/// The payload for editing a program.
///
/// Only the description is editable.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramUpdate {
    /// Replacement description.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_list_shape_without_detail_fields() {
        let value = json!({
            "uuid": "f1e2d3c4-b5a6-4789-8abc-def012345678",
            "name": "TB Treatment",
            "description": "Directly observed TB treatment",
            "status": "active",
            "created_at": "2025-03-01T09:00:00Z",
            "created_by": "admin@example.com"
        });

        let program: Program = serde_json::from_value(value).unwrap();
        assert_eq!(program.name, "TB Treatment");
        assert!(program.total_enrolled_clients.is_none());
        assert!(program.clients.is_none());
    }

    #[test]
    fn decodes_detail_shape_with_clients() {
        let value = json!({
            "uuid": "f1e2d3c4-b5a6-4789-8abc-def012345678",
            "name": "TB Treatment",
            "description": "Directly observed TB treatment",
            "status": "active",
            "created_at": "2025-03-01T09:00:00Z",
            "created_by": "admin@example.com",
            "total_enrolled_clients": 1,
            "clients": [{
                "uuid": "7bb4a3e0-5a9f-4f7e-9d2a-1c6b8e4f0a11",
                "first_name": "Wanjiku",
                "last_name": "Kamau",
                "dob": "1990-04-12",
                "phone_number": "+254712345678",
                "county": "Nairobi",
                "sub_county": "Westlands",
                "gender": "female",
                "created_at": "2025-01-05T12:00:00Z"
            }]
        });

        let program: Program = serde_json::from_value(value).unwrap();
        assert_eq!(program.total_enrolled_clients, Some(1));
        assert_eq!(program.clients.as_ref().unwrap().len(), 1);
    }
}
