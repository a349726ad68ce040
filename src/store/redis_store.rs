use async_trait::async_trait;
use redis::{AsyncCommands, Client, IntoConnectionInfo};

use super::{KeyValueStore, StoreError};

/// Redis backed store. The client is built once; every call opens its own
/// multiplexed connection and drops it when done.
#[derive(Debug)]
pub struct RedisStore {
    client: Client,
}

impl RedisStore {
    pub fn new(url: &str, password: Option<String>) -> Result<Self, StoreError> {
        let mut connection_info = url.into_connection_info()?;
        if password.is_some() {
            connection_info.redis.password = password;
        }

        Ok(Self {
            client: Client::open(connection_info)?,
        })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    #[tracing::instrument(name = "Redis GET", skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut connection = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = connection.get(key).await?;
        Ok(value)
    }

    #[tracing::instrument(name = "Redis SET", skip(self, value))]
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut connection = self.client.get_multiplexed_async_connection().await?;
        connection.set::<_, _, ()>(key, value).await?;
        Ok(())
    }

    #[tracing::instrument(name = "Redis KEYS", skip(self))]
    async fn keys(&self, pattern: &str) -> Result<Vec<String>, StoreError> {
        let mut connection = self.client.get_multiplexed_async_connection().await?;
        let keys: Vec<String> = connection.keys(pattern).await?;
        Ok(keys)
    }

    #[tracing::instrument(name = "Redis EXISTS", skip(self))]
    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let mut connection = self.client.get_multiplexed_async_connection().await?;
        let exists: bool = connection.exists(key).await?;
        Ok(exists)
    }
}
