//! Account endpoints: registration, sign-in, sign-out, profile.

use tracing::{debug, instrument};

use afya_core::model::UserProfile;
use afya_core::{AccessToken, RefreshToken, Result, TokenPair};

use crate::client::RestClient;
use crate::endpoints::{
    LOGIN, LOGOUT, LoginRequest, LoginResponse, LogoutRequest, PROFILE, REGISTER, RegisterRequest,
};

/// Typed access to the backend's auth endpoints.
///
/// This is the raw API surface; it neither reads nor writes the token
/// store. The session controller composes these calls into the sign-in and
/// sign-out flows.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: RestClient,
}

impl AuthApi {
    /// Create an auth API over the given client.
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Register a new account.
    ///
    /// Registration does not sign the user in; a fresh account still has to
    /// go through [`login`](AuthApi::login).
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the registration, for
    /// example for an already-used email.
    #[instrument(skip(self, password))]
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<()> {
        debug!("registering account");

        let request = RegisterRequest {
            name,
            email,
            password,
        };

        // The backend echoes the created account; nothing downstream needs it
        let _: serde_json::Value = self.client.post_public(REGISTER, &request).await?;
        Ok(())
    }

    /// Exchange credentials for a token pair.
    ///
    /// # Errors
    ///
    /// Bad credentials surface as [`Error::AuthenticationFailed`]
    /// (the backend answers 401).
    ///
    /// [`Error::AuthenticationFailed`]: afya_core::Error::AuthenticationFailed
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair> {
        debug!("signing in");

        let request = LoginRequest { email, password };
        let response: LoginResponse = self.client.post_public(LOGIN, &request).await?;

        Ok(TokenPair::new(response.access, response.refresh))
    }

    /// Tell the backend to blacklist a refresh token.
    ///
    /// Both tokens are passed explicitly because the sign-out flow clears
    /// the store before this call is made: the access token authenticates
    /// the request and the refresh token rides in the body.
    #[instrument(skip(self, access, refresh))]
    pub async fn logout(&self, access: &AccessToken, refresh: &RefreshToken) -> Result<()> {
        debug!("signing out");

        let request = LogoutRequest {
            refresh: refresh.as_str(),
        };
        self.client
            .post_no_response_with_token(LOGOUT, &request, access)
            .await
    }

    /// Fetch the signed-in user's profile.
    ///
    /// Doubles as token validation: a 401 here means the stored access
    /// token is no longer good.
    #[instrument(skip(self))]
    pub async fn profile(&self) -> Result<UserProfile> {
        self.client.get(PROFILE).await
    }
}
