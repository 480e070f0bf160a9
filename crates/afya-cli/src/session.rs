//! Wiring between persisted tokens and the REST stack.

use std::sync::Arc;

use anyhow::{bail, Result};

use afya_core::TokenStore;
use afya_rest::{AuthApi, RestClient, SessionController};

use crate::config;
use crate::storage::FileTokenStorage;

/// Token store backed by the user's data directory.
pub fn token_store() -> Result<TokenStore> {
    Ok(TokenStore::new(Arc::new(FileTokenStorage::new()?)))
}

/// REST client for the configured server, reading tokens from disk.
pub fn rest_client(server: Option<&str>) -> Result<RestClient> {
    Ok(RestClient::new(config::server_url(server)?, token_store()?))
}

/// Session controller over the configured server.
pub fn controller(server: Option<&str>) -> Result<SessionController> {
    let client = rest_client(server)?;
    let tokens = client.tokens().clone();
    Ok(SessionController::new(AuthApi::new(client), tokens))
}

/// Fail fast when no tokens are on disk.
///
/// Only checks presence. Whether the tokens are still accepted is the
/// backend's call, made when the command sends its first request.
pub fn require_signed_in(client: &RestClient) -> Result<()> {
    if !client.tokens().is_authenticated() {
        bail!("Not signed in. Run 'afya auth login' first.");
    }
    Ok(())
}
