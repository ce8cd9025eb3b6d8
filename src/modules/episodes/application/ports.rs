use async_trait::async_trait;

use crate::modules::episodes::domain::{Episode, EpisodeChanges, NewEpisode};
use crate::shared::errors::AppResult;

/// Port for episode persistence
#[async_trait]
pub trait EpisodeRepository: Send + Sync {
    /// Episodes with their anime title, ordered by anime then episode number
    async fn find_all(&self, anime_id: Option<i32>) -> AppResult<Vec<Episode>>;

    /// One episode with its anime title
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Episode>>;

    async fn exists(&self, id: i32) -> AppResult<bool>;

    async fn create(&self, episode: NewEpisode) -> AppResult<i32>;

    async fn update(&self, id: i32, changes: EpisodeChanges) -> AppResult<()>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}
