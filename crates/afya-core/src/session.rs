//! Session state and route gating.
//!
//! The state machine here is pure data; driving it against the backend is
//! the session controller's job. Keeping the transitions and the gating
//! rules transport-free makes them directly testable.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ValidationError};
use crate::model::UserProfile;

/// The sign-in route.
pub const SIGN_IN_ROUTE: &str = "/signin";

/// The account registration route.
pub const SIGN_UP_ROUTE: &str = "/signup";

/// The post-sign-in landing route.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// The public landing route.
pub const ROOT_ROUTE: &str = "/";

/// Where a session stands with the backend.
///
/// The state always moves through [`Checking`](SessionState::Checking)
/// before settling; observers that read mid-verification see `Checking`,
/// never a stale verdict presented as settled.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No verification has happened yet.
    Unknown,

    /// A verification round-trip is in flight.
    Checking,

    /// The backend accepted the stored token and returned the profile.
    Authenticated {
        /// The verified user.
        user: UserProfile,
    },

    /// No usable credentials; tokens are cleared whenever this state is
    /// entered.
    Unauthenticated,
}

impl SessionState {
    /// Returns true only for a settled, verified session.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    /// Returns the verified user, if authenticated.
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated { user } => Some(user),
            _ => None,
        }
    }
}

/// A navigation target inside the dashboard.
///
/// Routes are rooted paths; anything not starting with `/` is rejected at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route(String);

impl Route {
    /// Create a route from a path, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty or not rooted.
    pub fn new(path: impl Into<String>) -> Result<Self, Error> {
        let path = path.into();
        if path.is_empty() {
            return Err(ValidationError::Route {
                value: path,
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        if !path.starts_with('/') {
            return Err(ValidationError::Route {
                value: path,
                reason: "must start with '/'".to_string(),
            }
            .into());
        }
        Ok(Self(path))
    }

    /// The sign-in route.
    pub fn sign_in() -> Self {
        Self(SIGN_IN_ROUTE.to_string())
    }

    /// The registration route.
    pub fn sign_up() -> Self {
        Self(SIGN_UP_ROUTE.to_string())
    }

    /// The dashboard route.
    pub fn dashboard() -> Self {
        Self(DASHBOARD_ROUTE.to_string())
    }

    /// The landing route.
    pub fn root() -> Self {
        Self(ROOT_ROUTE.to_string())
    }

    /// Returns the path as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for routes reachable without a session.
    ///
    /// Exactly the landing page and the two auth pages; everything else
    /// requires a verified session.
    pub fn is_public(&self) -> bool {
        matches!(self.0.as_str(), ROOT_ROUTE | SIGN_IN_ROUTE | SIGN_UP_ROUTE)
    }

    /// Returns true for the sign-in and registration pages.
    ///
    /// These are the routes an already-authenticated user is bounced away
    /// from.
    pub fn is_auth_page(&self) -> bool {
        matches!(self.0.as_str(), SIGN_IN_ROUTE | SIGN_UP_ROUTE)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// The verdict for one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Render the requested route.
    Proceed,

    /// Unauthenticated visit to a protected route; go sign in.
    RedirectToSignIn,

    /// Authenticated visit to an auth page; go to the dashboard.
    RedirectToDashboard,
}

impl Gate {
    /// Decide the verdict for a route given the session's verdict.
    ///
    /// `authenticated` must come from a settled verification, not from
    /// token presence alone.
    pub fn for_route(authenticated: bool, route: &Route) -> Gate {
        if authenticated {
            if route.is_auth_page() {
                Gate::RedirectToDashboard
            } else {
                Gate::Proceed
            }
        } else if route.is_public() {
            Gate::Proceed
        } else {
            Gate::RedirectToSignIn
        }
    }
}
