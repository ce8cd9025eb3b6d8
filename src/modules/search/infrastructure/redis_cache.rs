use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};

use crate::modules::search::application::SearchCache;
use crate::shared::errors::{AppError, AppResult};

/// Search cache backed by Redis `GET` / `SETEX`
pub struct RedisSearchCache {
    client: Client,
}

impl RedisSearchCache {
    pub fn new(redis_url: &str) -> AppResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| AppError::CacheError(format!("Failed to connect to Redis: {}", e)))?;

        Ok(Self { client })
    }

    async fn connection(&self) -> AppResult<MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::CacheError(format!("Redis connection failed: {}", e)))
    }
}

#[async_trait]
impl SearchCache for RedisSearchCache {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self.connection().await?;

        let data: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| AppError::CacheError(format!("Failed to get from cache: {}", e)))?;
        Ok(data)
    }

    async fn put(&self, key: &str, value: &str, ttl_secs: u64) -> AppResult<()> {
        let mut conn = self.connection().await?;

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| AppError::CacheError(format!("Failed to set cache: {}", e)))?;
        Ok(())
    }
}
