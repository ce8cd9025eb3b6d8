use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::command::{BulkCreateCommand, BulkResource};
use super::result::{BulkCreateResult, BulkItemFailure, BulkItemSuccess};
use crate::log_info;
use crate::modules::anime::{AnimeDraft, AnimeService};
use crate::modules::episodes::{EpisodeDraft, EpisodeService};
use crate::shared::application::use_case::UseCase;
use crate::shared::errors::{AppError, AppResult};

/// Inserts items one by one through the regular create rules, collecting
/// per-item failures instead of aborting
pub struct BulkCreateHandler {
    anime_service: Arc<AnimeService>,
    episode_service: Arc<EpisodeService>,
}

impl BulkCreateHandler {
    pub fn new(anime_service: Arc<AnimeService>, episode_service: Arc<EpisodeService>) -> Self {
        Self {
            anime_service,
            episode_service,
        }
    }

    async fn create_one(&self, resource: BulkResource, item: &Value) -> AppResult<i32> {
        match resource {
            BulkResource::Anime => {
                let draft: AnimeDraft = decode(item)?;
                self.anime_service.create(draft).await
            }
            BulkResource::Episodes => {
                let draft: EpisodeDraft = decode(item)?;
                self.episode_service.create(draft).await
            }
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(item: &Value) -> AppResult<T> {
    if !item.is_object() {
        return Err(AppError::ValidationError(
            "Missing required fields".to_string(),
        ));
    }
    serde_json::from_value(item.clone()).map_err(|e| AppError::ValidationError(e.to_string()))
}

#[async_trait]
impl UseCase<BulkCreateCommand, BulkCreateResult> for BulkCreateHandler {
    async fn execute(&self, command: BulkCreateCommand) -> AppResult<BulkCreateResult> {
        let mut results = Vec::new();
        let mut errors = Vec::new();

        for item in command.items {
            match self.create_one(command.resource, &item).await {
                Ok(id) => results.push(BulkItemSuccess { id, success: true }),
                Err(e) => errors.push(BulkItemFailure {
                    item,
                    error: e.client_message(),
                }),
            }
        }

        log_info!(
            "Bulk create on {}: {} created, {} failed",
            command.resource.as_str(),
            results.len(),
            errors.len()
        );
        Ok(BulkCreateResult::new(
            command.resource.as_str(),
            results,
            errors,
        ))
    }
}
