//! Authenticated HTTP client for the backend REST API.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use afya_core::{
    AccessToken, ApiError, BaseUrl, Error, NetworkError, Result, SchemaError, TokenStore,
};

use crate::endpoints::ApiErrorBody;

/// HTTP client for backend requests.
///
/// Every authenticated verb reads the access token from the shared
/// [`TokenStore`] at call time; a request made with no stored token fails
/// with [`Error::NoCredentials`] before anything is sent. The client never
/// writes to the store; reacting to rejected tokens is the session
/// controller's job.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base: BaseUrl,
    tokens: TokenStore,
}

impl RestClient {
    /// Create a new client for the given backend.
    pub fn new(base: BaseUrl, tokens: TokenStore) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("afya/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base,
            tokens,
        }
    }

    /// Returns the base URL this client is configured for.
    pub fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// Returns the token store this client reads from.
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Make an authenticated GET request.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn get<R>(&self, endpoint: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let token = self.bearer()?;
        debug!(endpoint, "GET");

        let response = self
            .client
            .get(self.base.endpoint(endpoint))
            .headers(self.auth_headers(&token))
            .send()
            .await
            .map_err(network_error)?;

        self.decode_response(endpoint, response).await
    }

    /// Make an authenticated GET request with query parameters.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn get_with_query<Q, R>(&self, endpoint: &str, params: &Q) -> Result<R>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let token = self.bearer()?;
        debug!(endpoint, "GET");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(self.base.endpoint(endpoint))
            .query(params)
            .headers(self.auth_headers(&token))
            .send()
            .await
            .map_err(network_error)?;

        self.decode_response(endpoint, response).await
    }

    /// Make an authenticated POST request.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn post<B, R>(&self, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let token = self.bearer()?;
        debug!(endpoint, "POST");

        let response = self
            .client
            .post(self.base.endpoint(endpoint))
            .json(body)
            .headers(self.auth_headers(&token))
            .send()
            .await
            .map_err(network_error)?;

        self.decode_response(endpoint, response).await
    }

    /// Make a POST request authenticated with an explicit token, discarding
    /// the response body.
    ///
    /// For the sign-out flow, which presents a token pair already removed
    /// from the store.
    #[instrument(skip(self, token), fields(base = %self.base))]
    pub async fn post_no_response_with_token<B>(
        &self,
        endpoint: &str,
        body: &B,
        token: &AccessToken,
    ) -> Result<()>
    where
        B: Serialize + std::fmt::Debug,
    {
        debug!(endpoint, "POST (explicit token, no response)");

        let response = self
            .client
            .post(self.base.endpoint(endpoint))
            .json(body)
            .headers(self.auth_headers(token))
            .send()
            .await
            .map_err(network_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.parse_failure(response).await)
        }
    }

    /// Make an unauthenticated POST request.
    ///
    /// Only the sign-in and registration endpoints accept requests without
    /// a bearer token.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn post_public<B, R>(&self, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!(endpoint, "POST (public)");

        let response = self
            .client
            .post(self.base.endpoint(endpoint))
            .json(body)
            .send()
            .await
            .map_err(network_error)?;

        self.decode_response(endpoint, response).await
    }

    /// Make an authenticated PATCH request.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn patch<B, R>(&self, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let token = self.bearer()?;
        debug!(endpoint, "PATCH");

        let response = self
            .client
            .patch(self.base.endpoint(endpoint))
            .json(body)
            .headers(self.auth_headers(&token))
            .send()
            .await
            .map_err(network_error)?;

        self.decode_response(endpoint, response).await
    }

    /// Make an authenticated PUT request.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn put<B, R>(&self, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let token = self.bearer()?;
        debug!(endpoint, "PUT");

        let response = self
            .client
            .put(self.base.endpoint(endpoint))
            .json(body)
            .headers(self.auth_headers(&token))
            .send()
            .await
            .map_err(network_error)?;

        self.decode_response(endpoint, response).await
    }

    /// Make an authenticated DELETE request.
    ///
    /// Deletion endpoints answer with an empty body, so there is nothing to
    /// decode on success.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn delete(&self, endpoint: &str) -> Result<()> {
        let token = self.bearer()?;
        debug!(endpoint, "DELETE");

        let response = self
            .client
            .delete(self.base.endpoint(endpoint))
            .headers(self.auth_headers(&token))
            .send()
            .await
            .map_err(network_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.parse_failure(response).await)
        }
    }

    /// Read the access token, failing before any network activity if absent.
    fn bearer(&self) -> Result<AccessToken> {
        self.tokens.access_token().ok_or(Error::NoCredentials)
    }

    /// Create authorization headers for authenticated requests.
    fn auth_headers(&self, token: &AccessToken) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", token.as_str());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).expect("invalid token characters"),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Decode a response body, or classify the failure.
    ///
    /// A success status with a body that does not match `R` is a schema
    /// error naming the endpoint; nothing half-decoded ever escapes.
    async fn decode_response<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            let body = response.bytes().await.map_err(network_error)?;
            serde_json::from_slice(&body)
                .map_err(|e| SchemaError::new(endpoint, e.to_string()).into())
        } else {
            Err(self.parse_failure(response).await)
        }
    }

    /// Classify a non-success response.
    ///
    /// 401 always maps to [`Error::AuthenticationFailed`], regardless of
    /// what the backend says; other statuses carry the backend's message.
    async fn parse_failure(&self, response: reqwest::Response) -> Error {
        let status = response.status().as_u16();

        if status == 401 {
            return Error::AuthenticationFailed;
        }

        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.into_message(),
            Err(_) => None,
        };

        Error::Api(ApiError::new(status, message))
    }
}

/// Map a reqwest failure onto the transport error taxonomy.
///
/// Lives here rather than as a `From` impl because both types are foreign
/// to this crate.
fn network_error(err: reqwest::Error) -> Error {
    let network = if err.is_timeout() {
        NetworkError::Timeout
    } else if err.is_connect() {
        NetworkError::Connection {
            message: err.to_string(),
        }
    } else {
        NetworkError::Http {
            message: err.to_string(),
        }
    };
    Error::Network(network)
}
