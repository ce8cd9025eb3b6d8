use async_trait::async_trait;

use crate::modules::anime::Anime;
use crate::modules::episodes::Episode;
use crate::modules::search::domain::{Dialect, Statement};
use crate::shared::errors::AppResult;

/// Executes rendered search statements against the catalog store
#[async_trait]
pub trait SearchStore: Send + Sync {
    /// Placeholder and pattern-matching syntax this store expects
    fn dialect(&self) -> Dialect;

    /// Run a `SELECT COUNT(*) AS count ...` statement
    async fn count(&self, statement: Statement) -> AppResult<u64>;

    async fn fetch_anime(&self, statement: Statement) -> AppResult<Vec<Anime>>;

    /// Episode rows carry `anime_title` and `anime_genre` from the join
    async fn fetch_episodes(&self, statement: Statement) -> AppResult<Vec<Episode>>;
}

/// String key-value cache with per-entry expiry
#[async_trait]
pub trait SearchCache: Send + Sync {
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    async fn put(&self, key: &str, value: &str, ttl_secs: u64) -> AppResult<()>;
}
