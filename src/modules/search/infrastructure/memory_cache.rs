use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::log_debug;
use crate::modules::search::application::SearchCache;
use crate::shared::errors::AppResult;

#[derive(Debug, Clone)]
struct CacheEntry {
    body: String,
    created_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn new(body: String, ttl: Duration) -> Self {
        Self {
            body,
            created_at: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }
}

/// Process-local cache used when no Redis URL is configured.
///
/// Expired entries are dropped on read and, on roughly one write in
/// twenty-five, swept from the whole map.
#[derive(Debug, Default)]
pub struct MemorySearchCache {
    entries: DashMap<String, CacheEntry>,
}

impl MemorySearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn cleanup_expired(&self) {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before.saturating_sub(self.entries.len());
        if removed > 0 {
            log_debug!("Evicted {} expired search cache entries", removed);
        }
    }
}

#[async_trait]
impl SearchCache for MemorySearchCache {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => return Ok(Some(entry.body.clone())),
            Some(_) => true,
            None => false,
        };
        if expired {
            self.entries.remove(key);
        }
        Ok(None)
    }

    async fn put(&self, key: &str, value: &str, ttl_secs: u64) -> AppResult<()> {
        self.entries.insert(
            key.to_string(),
            CacheEntry::new(value.to_string(), Duration::from_secs(ttl_secs)),
        );
        if rand::random::<u8>() < 10 {
            self.cleanup_expired();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_get() {
        let cache = MemorySearchCache::new();
        cache.put("search:?query=naruto", "{}", 300).await.unwrap();
        assert_eq!(
            cache.get("search:?query=naruto").await.unwrap().as_deref(),
            Some("{}")
        );
        assert_eq!(cache.get("search:?query=bleach").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_entry_is_a_miss_and_removed() {
        let cache = MemorySearchCache::new();
        cache.put("search:", "{}", 0).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;

        assert_eq!(cache.get("search:").await.unwrap(), None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let cache = MemorySearchCache::new();
        cache.put("k", "old", 300).await.unwrap();
        cache.put("k", "new", 300).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("new"));
        assert_eq!(cache.len(), 1);
    }
}
