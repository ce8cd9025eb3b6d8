use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use tokio::task;

use super::models::{EpisodeChangeset, EpisodeModel, NewEpisodeModel};
use crate::log_debug;
use crate::modules::episodes::application::EpisodeRepository;
use crate::modules::episodes::domain::{Episode, EpisodeChanges, NewEpisode};
use crate::schema::{anime, episodes};
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;
use crate::shared::Database;

pub struct EpisodeRepositoryImpl {
    db: Arc<Database>,
}

impl EpisodeRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EpisodeRepository for EpisodeRepositoryImpl {
    async fn find_all(&self, anime_id: Option<i32>) -> AppResult<Vec<Episode>> {
        let db = Arc::clone(&self.db);
        let start = std::time::Instant::now();

        let rows = task::spawn_blocking(move || -> AppResult<Vec<(EpisodeModel, String)>> {
            let mut conn = db.get_connection()?;
            let mut query = episodes::table
                .inner_join(anime::table)
                .select((EpisodeModel::as_select(), anime::title))
                .order((episodes::anime_id.asc(), episodes::episode_number.asc()))
                .into_boxed();

            if let Some(anime_id) = anime_id {
                query = query.filter(episodes::anime_id.eq(anime_id));
            }

            Ok(query.load(&mut conn)?)
        })
        .await??;

        LogContext::db_operation(
            "list",
            "episodes",
            Some(start.elapsed().as_millis() as u64),
        );
        Ok(rows
            .into_iter()
            .map(|(model, anime_title)| model.into_entity(Some(anime_title), None))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Episode>> {
        let db = Arc::clone(&self.db);

        let row = task::spawn_blocking(move || -> AppResult<Option<(EpisodeModel, String)>> {
            let mut conn = db.get_connection()?;
            let row = episodes::table
                .inner_join(anime::table)
                .filter(episodes::id.eq(id))
                .select((EpisodeModel::as_select(), anime::title))
                .first(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(row.map(|(model, anime_title)| model.into_entity(Some(anime_title), None)))
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let found = diesel::select(diesel::dsl::exists(episodes::table.find(id)))
                .get_result::<bool>(&mut conn)?;
            Ok(found)
        })
        .await?
    }

    async fn create(&self, episode: NewEpisode) -> AppResult<i32> {
        let db = Arc::clone(&self.db);
        let model = NewEpisodeModel::from(episode);

        task::spawn_blocking(move || -> AppResult<i32> {
            let mut conn = db.get_connection()?;
            let id = diesel::insert_into(episodes::table)
                .values(&model)
                .returning(episodes::id)
                .get_result::<i32>(&mut conn)?;
            Ok(id)
        })
        .await?
    }

    async fn update(&self, id: i32, changes: EpisodeChanges) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let changeset = EpisodeChangeset::new(changes, Utc::now());

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let updated = diesel::update(episodes::table.find(id))
                .set(&changeset)
                .execute(&mut conn)?;
            log_debug!("Updated episode {} ({} rows)", id, updated);
            Ok(())
        })
        .await?
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::delete(episodes::table.find(id)).execute(&mut conn)?;
            Ok(())
        })
        .await?
    }
}
