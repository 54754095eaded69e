//! # Persistence Port
//!
//! Two layers:
//!
//! - [`KeyValueStore`]: the raw backend, strings in and out ([`InMemoryStore`], [`RedisStore`]).
//! - [`Persistence`]: typed `get` / `set` over any backend, encoding values as JSON.
//!
//! The rest of the bot only sees [`Persistence`] and [`StoreError`], so the encoding and the
//! backend can change without touching the order logic.

pub mod memory;
pub mod redis;

pub use memory::InMemoryStore;
pub use self::redis::RedisStore;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Key the daily order is stored under.
pub const ORDER_KEY: &str = "order";

/// Key the menu text is stored under.
pub const MENU_KEY: &str = "menu";

/// Errors raised at the persistence boundary.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// Nothing is stored under the key. A normal condition for a fresh deployment.
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Something is stored under the key but it is not a valid value of the requested type.
    #[error("Cannot decode value of {key}: {reason}")]
    Decode { key: String, reason: String },

    /// The backend could not be reached or the value could not be encoded.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Raw string key-value backend.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Typed access to a [`KeyValueStore`].
#[derive(Clone)]
pub struct Persistence {
    backend: Arc<dyn KeyValueStore>,
}

impl Persistence {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// A persistence port over a fresh [`InMemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(InMemoryStore::new())
    }

    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let payload =
            serde_json::to_string(value).map_err(|e| StoreError::Storage(e.to_string()))?;
        debug!(key, bytes = payload.len(), "set");
        self.backend.set(key, payload).await
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, StoreError> {
        let payload = self
            .backend
            .get(key)
            .await?
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;
        debug!(key, bytes = payload.len(), "get");
        serde_json::from_str(&payload).map_err(|e| StoreError::Decode {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}
