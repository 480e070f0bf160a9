//! Error types for the afya toolkit.
//!
//! This module provides a unified error type with explicit variants for
//! missing credentials, rejected credentials, backend errors, transport
//! failures, response-shape mismatches, and input validation.

use std::fmt;
use thiserror::Error;

/// The unified error type for afya operations.
///
/// Callers that only want to branch on "did my session die" can match
/// [`Error::NoCredentials`] and [`Error::AuthenticationFailed`]; everything
/// else carries enough detail to be reported as-is.
#[derive(Debug, Error)]
pub enum Error {
    /// An authenticated request was attempted with no stored access token.
    ///
    /// The request is never sent; this is raised before any network activity.
    #[error("no credentials available")]
    NoCredentials,

    /// The backend rejected the presented credentials (HTTP 401).
    ///
    /// Raised both for bad sign-in credentials and for expired or revoked
    /// tokens on authenticated requests. The backend's own wording is
    /// deliberately not carried; callers should treat this as "sign in again".
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The backend answered with a non-success status other than 401.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The request never completed (connection, DNS, TLS, timeout).
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    /// A success response did not decode into the expected shape.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Caller-supplied input was rejected before any request was made.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The token storage backend failed to persist or clear tokens.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// A non-success backend response, excluding 401.
///
/// Carries the HTTP status and whatever human-readable message the backend
/// put in its error body, if any.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server body (`message` or `detail` field).
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// Check if the backend reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP transport error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A success response whose body did not match the expected schema.
///
/// Decoding is strict: a 2xx body that fails to deserialize surfaces here
/// instead of propagating a half-populated value into the caller.
#[derive(Debug)]
pub struct SchemaError {
    /// The endpoint path that produced the response.
    pub endpoint: String,
    /// What the decoder rejected.
    pub detail: String,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "response from {} did not match the expected shape: {}",
            self.endpoint, self.detail
        )
    }
}

impl std::error::Error for SchemaError {}

impl SchemaError {
    /// Create a new schema error.
    pub fn new(endpoint: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            detail: detail.into(),
        }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Invalid backend base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },

    /// Invalid navigation route.
    #[error("invalid route '{value}': {reason}")]
    Route { value: String, reason: String },

    /// A form field failed validation before submission.
    #[error("{field}: {reason}")]
    Field { field: String, reason: String },
}

/// Token storage failures.
///
/// Reads never surface here; a broken store reads as empty. Writes and
/// removals report the underlying failure so callers know persistence
/// did not happen.
#[derive(Debug, Error)]
#[error("token storage failed: {message}")]
pub struct StorageError {
    /// Description of the underlying failure.
    pub message: String,
}

impl StorageError {
    /// Create a new storage error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
