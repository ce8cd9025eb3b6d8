use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use tokio::task;

use crate::log_debug;
use crate::modules::anime::application::ports::AnimeRepository;
use crate::modules::anime::domain::{Anime, AnimeChanges, NewAnime};
use crate::modules::anime::infrastructure::models::{AnimeChangeset, AnimeModel, NewAnimeModel};
use crate::schema::anime;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::TimedOperation;
use crate::shared::Database;

pub struct AnimeRepositoryImpl {
    db: Arc<Database>,
}

impl AnimeRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AnimeRepository for AnimeRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Anime>> {
        let db = Arc::clone(&self.db);
        let timer = TimedOperation::new("anime_find_all");

        let rows = task::spawn_blocking(move || -> AppResult<Vec<AnimeModel>> {
            let mut conn = db.get_connection()?;
            let rows = anime::table
                .select(AnimeModel::as_select())
                .order(anime::title.asc())
                .load(&mut conn)?;
            Ok(rows)
        })
        .await??;

        timer.finish_with_info(&format!("{} rows", rows.len()));
        Ok(rows.into_iter().map(Anime::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Anime>> {
        let db = Arc::clone(&self.db);

        let row = task::spawn_blocking(move || -> AppResult<Option<AnimeModel>> {
            let mut conn = db.get_connection()?;
            let row = anime::table
                .find(id)
                .select(AnimeModel::as_select())
                .first(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(row.map(Anime::from))
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let found = diesel::select(diesel::dsl::exists(anime::table.find(id)))
                .get_result::<bool>(&mut conn)?;
            Ok(found)
        })
        .await?
    }

    async fn create(&self, new_anime: NewAnime) -> AppResult<i32> {
        let db = Arc::clone(&self.db);
        let model = NewAnimeModel::from(new_anime);

        task::spawn_blocking(move || -> AppResult<i32> {
            let mut conn = db.get_connection()?;
            let id = diesel::insert_into(anime::table)
                .values(&model)
                .returning(anime::id)
                .get_result::<i32>(&mut conn)?;
            Ok(id)
        })
        .await?
    }

    async fn update(&self, id: i32, changes: AnimeChanges) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let changeset = AnimeChangeset::new(changes, Utc::now());

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let updated = diesel::update(anime::table.find(id))
                .set(&changeset)
                .execute(&mut conn)?;
            log_debug!("Updated anime {} ({} rows)", id, updated);
            Ok(())
        })
        .await?
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            // Episodes are removed by the ON DELETE CASCADE foreign key
            diesel::delete(anime::table.find(id)).execute(&mut conn)?;
            Ok(())
        })
        .await?
    }
}
