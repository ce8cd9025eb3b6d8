use std::sync::Arc;

use super::ports::SearchCache;
use crate::shared::utils::logger::LogContext;

/// Read-through/write-through access to cached search bodies.
///
/// Cache failures never fail a search: they are logged and treated as a miss.
pub struct CacheGate {
    cache: Arc<dyn SearchCache>,
    ttl_secs: u64,
}

impl CacheGate {
    pub fn new(cache: Arc<dyn SearchCache>, ttl_secs: u64) -> Self {
        Self { cache, ttl_secs }
    }

    /// `search:` followed by the raw query string, leading `?` included
    pub fn key_for(raw_query: &str) -> String {
        format!("search:{}", raw_query)
    }

    pub async fn lookup(&self, key: &str) -> Option<String> {
        match self.cache.get(key).await {
            Ok(hit) => {
                LogContext::cache_lookup(key, hit.is_some());
                hit
            }
            Err(e) => {
                LogContext::cache_failure("read", key, &e);
                None
            }
        }
    }

    pub async fn store(&self, key: &str, body: &str) {
        if let Err(e) = self.cache.put(key, body, self.ttl_secs).await {
            LogContext::cache_failure("write", key, &e);
        }
    }
}
