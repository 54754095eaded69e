//! Redis backend for durable storage.

use super::{KeyValueStore, StoreError};
use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::info;

pub struct RedisStore {
    client: redis::Client,
}

impl RedisStore {
    /// Opens a client for `connection_url` (e.g. `redis://:password@host:6379/0`).
    ///
    /// No connection is made until [`RedisStore::ping`] or the first request.
    pub fn new(connection_url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(connection_url)
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        Ok(Self { client })
    }

    /// Round-trips a `PING` so a bad URL or a down server is caught at startup.
    pub async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        info!(reply = %pong, "Redis reachable");
        Ok(())
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, StoreError> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection().await?;
        conn.get(key)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))
    }
}
