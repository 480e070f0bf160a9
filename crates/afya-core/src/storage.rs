//! Token persistence: the storage trait, an in-memory backend, and the store.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::Result;
use crate::tokens::{AccessToken, RefreshToken, TokenPair};

/// Storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// A synchronous string key/value backend for token persistence.
///
/// Implementations decide where tokens live (process memory, a file on
/// disk). The [`TokenStore`] built on top never assumes more than these
/// three operations.
///
/// # Contract
///
/// - `get` must not fail; an unreadable backend reads as empty.
/// - `set` and `remove` report persistence failures to the caller.
/// - `remove` of an absent key is a no-op, not an error.
pub trait TokenStorage: Send + Sync {
    /// Read a value, or `None` if the key is absent or the backend is
    /// unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous value for the key.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key if present.
    fn remove(&self, key: &str) -> Result<()>;
}

/// An in-memory [`TokenStorage`] backend.
///
/// The default backend for library use and tests. Tokens live for the life
/// of the process and writes cannot fail.
#[derive(Default)]
pub struct MemoryTokenStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStorage {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().unwrap().remove(key);
        Ok(())
    }
}

/// The single owner of persisted session tokens.
///
/// All reads and writes of the access/refresh pair go through this type;
/// nothing else touches the underlying backend keys. Clones share the same
/// backend.
///
/// Presence of an access token is the store's only notion of "signed in".
/// Expiry is discovered lazily when the backend rejects a request; see
/// the session controller for how that rejection feeds back into a
/// [`clear()`](TokenStore::clear).
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn TokenStorage>,
}

impl TokenStore {
    /// Create a store over the given backend.
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self { storage }
    }

    /// Create a store over a process-local in-memory backend.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStorage::new()))
    }

    /// Persist a freshly issued token pair, replacing any previous pair.
    pub fn store(&self, pair: &TokenPair) -> Result<()> {
        self.storage.set(ACCESS_TOKEN_KEY, pair.access().as_str())?;
        self.storage
            .set(REFRESH_TOKEN_KEY, pair.refresh().as_str())?;
        Ok(())
    }

    /// Returns the stored access token, if any.
    pub fn access_token(&self) -> Option<AccessToken> {
        self.storage.get(ACCESS_TOKEN_KEY).map(AccessToken::new)
    }

    /// Returns the stored refresh token, if any.
    pub fn refresh_token(&self) -> Option<RefreshToken> {
        self.storage.get(REFRESH_TOKEN_KEY).map(RefreshToken::new)
    }

    /// Remove both tokens. Idempotent; clearing an empty store succeeds.
    pub fn clear(&self) -> Result<()> {
        self.storage.remove(ACCESS_TOKEN_KEY)?;
        self.storage.remove(REFRESH_TOKEN_KEY)?;
        Ok(())
    }

    /// Returns true if an access token is present.
    ///
    /// Presence only; the token may be expired or garbage. The backend is
    /// the sole judge of validity.
    pub fn is_authenticated(&self) -> bool {
        self.storage.get(ACCESS_TOKEN_KEY).is_some()
    }
}

// Keep backend contents out of Debug output
impl fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStore")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}
