//! The session controller: drives the session state machine against the
//! backend.

use std::sync::{Arc, RwLock};

use tracing::{debug, info, instrument, warn};

use afya_core::model::UserProfile;
use afya_core::{Gate, Result, Route, SessionState, TokenStore};

use crate::auth::AuthApi;

/// Owns the session lifecycle: verification, sign-in, sign-out,
/// registration, and route gating.
///
/// The controller is the only writer of both the session state and the
/// token store. Every transition into
/// [`Unauthenticated`](SessionState::Unauthenticated) clears the store, so
/// stale tokens can never outlive a failed verification.
///
/// Clones share state (internal `Arc`) and are safe to use from multiple
/// tasks. Token presence is re-verified against the backend on every
/// [`check`](SessionController::check); nothing is trusted from the
/// previous verdict.
#[derive(Debug, Clone)]
pub struct SessionController {
    inner: Arc<ControllerInner>,
}

#[derive(Debug)]
struct ControllerInner {
    api: AuthApi,
    tokens: TokenStore,
    state: RwLock<SessionState>,
}

impl SessionController {
    /// Create a controller over the given API and token store.
    ///
    /// The state starts [`Unknown`](SessionState::Unknown); nothing is
    /// verified until the first [`check`](SessionController::check).
    pub fn new(api: AuthApi, tokens: TokenStore) -> Self {
        Self {
            inner: Arc::new(ControllerInner {
                api,
                tokens,
                state: RwLock::new(SessionState::Unknown),
            }),
        }
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.inner.state.read().unwrap().clone()
    }

    /// Returns the verified user, if the session is authenticated.
    pub fn user(&self) -> Option<UserProfile> {
        self.state().user().cloned()
    }

    /// Verify the stored token against the backend and settle the state.
    ///
    /// With no stored token this settles immediately without any network
    /// activity. Otherwise the profile endpoint is the judge: success
    /// settles [`Authenticated`](SessionState::Authenticated) with the
    /// returned user; any failure, including transport failures, clears
    /// the store and settles
    /// [`Unauthenticated`](SessionState::Unauthenticated).
    #[instrument(skip(self))]
    pub async fn check(&self) -> SessionState {
        info!("Verifying session");
        self.set_state(SessionState::Checking);

        if !self.inner.tokens.is_authenticated() {
            debug!("No stored token");
            return self.invalidate();
        }

        match self.inner.api.profile().await {
            Ok(user) => {
                debug!(email = %user.email, "Session verified");
                let state = SessionState::Authenticated { user };
                self.set_state(state.clone());
                state
            }
            Err(err) => {
                warn!(error = %err, "Profile fetch failed; invalidating session");
                self.invalidate()
            }
        }
    }

    /// Decide what a navigation to `route` should do.
    ///
    /// Runs a full [`check`](SessionController::check) first; the verdict
    /// is always based on a fresh verification, never on token presence
    /// alone.
    pub async fn authorize(&self, route: &Route) -> Gate {
        let state = self.check().await;
        Gate::for_route(state.is_authenticated(), route)
    }

    /// Sign in and settle the session on the new credentials.
    ///
    /// On success the token pair is persisted and the state settles
    /// [`Authenticated`](SessionState::Authenticated) with the profile
    /// fetched using the new access token. Any failure along the way,
    /// including a profile fetch that fails after the tokens were stored,
    /// clears the store and settles
    /// [`Unauthenticated`](SessionState::Unauthenticated).
    ///
    /// # Errors
    ///
    /// [`Error::AuthenticationFailed`] for rejected credentials; storage,
    /// network, and API errors pass through.
    ///
    /// [`Error::AuthenticationFailed`]: afya_core::Error::AuthenticationFailed
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile> {
        info!("Signing in");
        self.set_state(SessionState::Checking);

        let pair = match self.inner.api.login(email, password).await {
            Ok(pair) => pair,
            Err(err) => {
                self.invalidate();
                return Err(err);
            }
        };

        if let Err(err) = self.inner.tokens.store(&pair) {
            warn!(error = %err, "Failed to persist tokens");
            self.invalidate();
            return Err(err);
        }

        match self.inner.api.profile().await {
            Ok(user) => {
                debug!(email = %user.email, "Signed in");
                self.set_state(SessionState::Authenticated { user: user.clone() });
                Ok(user)
            }
            Err(err) => {
                warn!(error = %err, "Profile fetch after sign-in failed");
                self.invalidate();
                Err(err)
            }
        }
    }

    /// Sign out.
    ///
    /// The store is cleared and the state settles
    /// [`Unauthenticated`](SessionState::Unauthenticated) before the
    /// backend is told, so the local session dies even when the backend is
    /// unreachable. The backend call is skipped when there was no complete
    /// token pair to revoke; if it fails, the failure is logged and
    /// swallowed.
    #[instrument(skip(self))]
    pub async fn logout(&self) {
        info!("Signing out");

        // Capture the pair before clearing; the revoke call runs against
        // tokens the store no longer holds
        let access = self.inner.tokens.access_token();
        let refresh = self.inner.tokens.refresh_token();

        self.invalidate();

        let (access, refresh) = match (access, refresh) {
            (Some(access), Some(refresh)) => (access, refresh),
            _ => {
                debug!("No token pair to revoke");
                return;
            }
        };

        if let Err(err) = self.inner.api.logout(&access, &refresh).await {
            warn!(error = %err, "Backend sign-out failed; local session already cleared");
        }
    }

    /// Register a new account.
    ///
    /// The display name is the trimmed join of the two name parts, matching
    /// what the backend expects. Registration leaves the session untouched;
    /// the new account signs in separately.
    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<()> {
        info!("Registering account");

        let name = format!("{} {}", first_name, last_name).trim().to_string();
        self.inner.api.register(&name, email, password).await
    }

    /// Clear the store and settle Unauthenticated.
    ///
    /// Every path into Unauthenticated comes through here; the clear is
    /// unconditional.
    fn invalidate(&self) -> SessionState {
        if let Err(err) = self.inner.tokens.clear() {
            warn!(error = %err, "Failed to clear token store");
        }
        self.set_state(SessionState::Unauthenticated);
        SessionState::Unauthenticated
    }

    fn set_state(&self, state: SessionState) {
        *self.inner.state.write().unwrap() = state;
    }
}
