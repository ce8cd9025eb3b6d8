use std::sync::Arc;

use super::ports::EpisodeRepository;
use crate::log_info;
use crate::modules::anime::AnimeRepository;
use crate::modules::episodes::domain::{Episode, EpisodeChanges, EpisodeDraft};
use crate::shared::errors::{AppError, AppResult};

fn not_found() -> AppError {
    AppError::NotFound("Episode not found".to_string())
}

fn anime_not_found() -> AppError {
    AppError::NotFound("Associated anime not found".to_string())
}

pub struct EpisodeService {
    episode_repo: Arc<dyn EpisodeRepository>,
    anime_repo: Arc<dyn AnimeRepository>,
}

impl EpisodeService {
    pub fn new(
        episode_repo: Arc<dyn EpisodeRepository>,
        anime_repo: Arc<dyn AnimeRepository>,
    ) -> Self {
        Self {
            episode_repo,
            anime_repo,
        }
    }

    /// All episodes, or those of one anime. A filter that is not a number
    /// matches nothing.
    pub async fn list(&self, anime_id: Option<&str>) -> AppResult<Vec<Episode>> {
        match anime_id.filter(|raw| !raw.is_empty()) {
            None => self.episode_repo.find_all(None).await,
            Some(raw) => match raw.trim().parse::<i32>() {
                Ok(id) => self.episode_repo.find_all(Some(id)).await,
                Err(_) => Ok(Vec::new()),
            },
        }
    }

    pub async fn get(&self, id: i32) -> AppResult<Episode> {
        self.episode_repo.find_by_id(id).await?.ok_or_else(not_found)
    }

    pub async fn create(&self, draft: EpisodeDraft) -> AppResult<i32> {
        let episode = draft.validate()?;
        if !self.anime_repo.exists(episode.anime_id).await? {
            return Err(anime_not_found());
        }

        let anime_id = episode.anime_id;
        let number = episode.episode_number;
        let id = self.episode_repo.create(episode).await?;
        log_info!("Created episode {} (anime {}, #{})", id, anime_id, number);
        Ok(id)
    }

    pub async fn update(&self, id: i32, changes: EpisodeChanges) -> AppResult<i32> {
        if !self.episode_repo.exists(id).await? {
            return Err(not_found());
        }
        if let Some(anime_id) = changes.anime_id {
            if !self.anime_repo.exists(anime_id).await? {
                return Err(anime_not_found());
            }
        }
        self.episode_repo.update(id, changes).await?;
        Ok(id)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.episode_repo.exists(id).await? {
            return Err(not_found());
        }
        self.episode_repo.delete(id).await
    }
}
