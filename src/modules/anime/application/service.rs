use std::sync::Arc;

use crate::log_info;
use crate::modules::anime::application::ports::AnimeRepository;
use crate::modules::anime::domain::{Anime, AnimeChanges, AnimeDraft};
use crate::shared::errors::{AppError, AppResult};

fn not_found() -> AppError {
    AppError::NotFound("Anime not found".to_string())
}

/// Anime CRUD rules on top of the repository port
pub struct AnimeService {
    anime_repo: Arc<dyn AnimeRepository>,
}

impl AnimeService {
    pub fn new(anime_repo: Arc<dyn AnimeRepository>) -> Self {
        Self { anime_repo }
    }

    pub async fn list(&self) -> AppResult<Vec<Anime>> {
        self.anime_repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> AppResult<Anime> {
        self.anime_repo.find_by_id(id).await?.ok_or_else(not_found)
    }

    pub async fn create(&self, draft: AnimeDraft) -> AppResult<i32> {
        let anime = draft.validate()?;
        let title = anime.title.clone();
        let id = self.anime_repo.create(anime).await?;
        log_info!("Created anime {} ({})", id, title);
        Ok(id)
    }

    pub async fn update(&self, id: i32, changes: AnimeChanges) -> AppResult<i32> {
        if !self.anime_repo.exists(id).await? {
            return Err(not_found());
        }
        self.anime_repo.update(id, changes).await?;
        Ok(id)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.anime_repo.exists(id).await? {
            return Err(not_found());
        }
        self.anime_repo.delete(id).await?;
        log_info!("Deleted anime {} and its episodes", id);
        Ok(())
    }
}
