//! Key-value store holding group records.

mod memory;
mod redis_store;

use async_trait::async_trait;

pub use self::memory::InMemoryStore;
pub use self::redis_store::RedisStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to talk to the key-value store")]
    Redis(#[from] redis::RedisError),
}

/// The subset of key-value commands the admin panel relies on.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Unconditionally overwrites any existing value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, StoreError>;

    async fn exists(&self, key: &str) -> Result<bool, StoreError>;
}
