//! The signed-in user's profile.

use serde::{Deserialize, Serialize};

/// The profile returned by the profile endpoint.
///
/// Fetching it doubles as token validation: a 401 here means the stored
/// access token is no longer good.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The account email address.
    pub email: String,

    /// The account display name.
    pub name: String,
}
