use async_trait::async_trait;

use crate::modules::anime::domain::{Anime, AnimeChanges, NewAnime};
use crate::shared::errors::AppResult;

/// Port (interface) for anime persistence
/// Infrastructure provides the implementation
#[async_trait]
pub trait AnimeRepository: Send + Sync {
    /// All anime ordered by title
    async fn find_all(&self) -> AppResult<Vec<Anime>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Anime>>;

    async fn exists(&self, id: i32) -> AppResult<bool>;

    /// Insert and return the generated id
    async fn create(&self, anime: NewAnime) -> AppResult<i32>;

    /// Apply the provided fields and refresh `updated_at`
    async fn update(&self, id: i32, changes: AnimeChanges) -> AppResult<()>;

    /// Delete an anime; its episodes go with it
    async fn delete(&self, id: i32) -> AppResult<()>;
}
