//! afya-core - Core types for the afya health program toolkit.
//!
//! This crate holds everything that does not touch the network: the token
//! store and its storage trait, the session state machine and route gating
//! rules, the cross-view event bus, and the backend record types. The
//! `afya-rest` crate drives these against a real backend.

pub mod error;
pub mod events;
pub mod model;
pub mod session;
pub mod storage;
pub mod tokens;
pub mod types;

pub use error::{ApiError, Error, NetworkError, SchemaError, StorageError, ValidationError};
pub use events::{DomainEvent, EventBus, EventKind, Subscription};
pub use session::{Gate, Route, SessionState};
pub use storage::{MemoryTokenStorage, TokenStorage, TokenStore};
pub use tokens::{AccessToken, RefreshToken, TokenPair};
pub use types::BaseUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
