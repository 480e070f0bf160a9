//! Backend endpoint paths and request/response wire types.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Endpoint Paths
// ============================================================================

/// POST: register a new account.
pub const REGISTER: &str = "/api/v1/auth/register/";

/// POST: exchange credentials for a token pair.
pub const LOGIN: &str = "/api/v1/auth/login/";

/// POST: blacklist the refresh token server-side.
pub const LOGOUT: &str = "/api/v1/auth/logout/";

/// GET: the signed-in user's profile; doubles as token validation.
pub const PROFILE: &str = "/api/v1/auth/me/";

/// GET: all clients.
pub const CLIENTS: &str = "/api/v1/clients/";

/// POST: register a client.
pub const CLIENT_CREATE: &str = "/api/v1/clients/create/";

/// GET/DELETE: one client.
pub fn client(uuid: Uuid) -> String {
    format!("/api/v1/clients/{}/", uuid)
}

/// GET: all programs.
pub const PROGRAMS: &str = "/api/v1/programs/";

/// POST: create a program.
pub const PROGRAM_CREATE: &str = "/api/v1/programs/create/";

/// GET: one program.
pub fn program(uuid: Uuid) -> String {
    format!("/api/v1/programs/{}/", uuid)
}

/// PATCH: edit a program's description.
pub fn program_update(uuid: Uuid) -> String {
    format!("/api/v1/programs/{}/update/", uuid)
}

/// POST: enroll a client into a program.
pub const ENROLLMENT_CREATE: &str = "/api/v1/enrollments/create/";

/// GET: total client count.
pub const ANALYTICS_TOTAL_CLIENTS: &str = "/api/v1/analytics/total_clients/";

/// GET: active program count.
pub const ANALYTICS_ACTIVE_PROGRAMS: &str = "/api/v1/analytics/active_programs/";

/// GET: enrollments in the last 30 days.
///
/// The backend registers this route without a trailing slash, unlike every
/// other analytics route.
pub const ANALYTICS_ENROLLMENTS: &str = "/api/v1/analytics/enrollments";

/// GET: enrollment counts by year and month.
pub const ANALYTICS_MONTHLY_ENROLLMENTS: &str = "/api/v1/analytics/monthly_enrollments/";

/// GET: monthly client/program series.
pub const ANALYTICS_MONTHLY_TOTALS: &str = "/api/v1/analytics/monthly_clients_programs/";

/// GET: client counts per program.
pub const ANALYTICS_PROGRAM_DISTRIBUTION: &str = "/api/v1/analytics/program_distribution/";

/// GET: the activity feed.
pub const ACTIVITIES: &str = "/api/v1/activities/";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for account registration.
#[derive(Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

// Intentionally hide password in Debug output
impl fmt::Debug for RegisterRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Request body for sign-in.
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

// Intentionally hide password in Debug output
impl fmt::Debug for LoginRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Response from sign-in.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
}

/// Request body for sign-out.
#[derive(Serialize)]
pub struct LogoutRequest<'a> {
    pub refresh: &'a str,
}

// Intentionally hide the refresh token in Debug output
impl fmt::Debug for LogoutRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogoutRequest")
            .field("refresh", &"[REDACTED]")
            .finish()
    }
}

/// Backend error body format.
///
/// Plain views put the text under `message`; the DRF auth views use
/// `detail`. Either may be missing.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
    pub detail: Option<String>,
}

impl ApiErrorBody {
    /// Returns whichever message field the backend filled in.
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_routes_interpolate_the_uuid() {
        let uuid = Uuid::parse_str("7bb4a3e0-5a9f-4f7e-9d2a-1c6b8e4f0a11").unwrap();
        assert_eq!(
            client(uuid),
            "/api/v1/clients/7bb4a3e0-5a9f-4f7e-9d2a-1c6b8e4f0a11/"
        );
        assert_eq!(
            program_update(uuid),
            "/api/v1/programs/7bb4a3e0-5a9f-4f7e-9d2a-1c6b8e4f0a11/update/"
        );
    }

    #[test]
    fn login_request_hides_password_in_debug() {
        let request = LoginRequest {
            email: "admin@example.com",
            password: "secret123",
        };
        let debug = format!("{:?}", request);
        assert!(debug.contains("admin@example.com"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn register_request_hides_password_in_debug() {
        let request = RegisterRequest {
            name: "Admin User",
            email: "admin@example.com",
            password: "secret123",
        };
        let debug = format!("{:?}", request);
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn error_body_prefers_message_over_detail() {
        let body = ApiErrorBody {
            message: Some("from message".into()),
            detail: Some("from detail".into()),
        };
        assert_eq!(body.into_message().as_deref(), Some("from message"));

        let body = ApiErrorBody {
            message: None,
            detail: Some("from detail".into()),
        };
        assert_eq!(body.into_message().as_deref(), Some("from detail"));
    }
}
