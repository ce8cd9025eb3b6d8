use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::sql_types::{BigInt, Integer, Nullable, Text, Timestamptz};
use tokio::task;

use crate::modules::anime::infrastructure::models::AnimeModel;
use crate::modules::anime::Anime;
use crate::modules::episodes::Episode;
use crate::modules::search::application::SearchStore;
use crate::modules::search::domain::{Dialect, SqlParam, Statement};
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;
use crate::shared::Database;

#[derive(QueryableByName, Debug)]
struct CountResult {
    #[diesel(sql_type = BigInt)]
    count: i64,
}

/// Episode row joined with its parent anime's title and genre
#[derive(QueryableByName, Debug)]
struct EpisodeSearchRow {
    #[diesel(sql_type = Integer)]
    id: i32,
    #[diesel(sql_type = Integer)]
    anime_id: i32,
    #[diesel(sql_type = Text)]
    title: String,
    #[diesel(sql_type = Integer)]
    episode_number: i32,
    #[diesel(sql_type = Text)]
    thumbnail_url: String,
    #[diesel(sql_type = Nullable<Text>)]
    video_url_480p: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    video_url_720p: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    video_url_1080p: Option<String>,
    #[diesel(sql_type = Text)]
    video_url_max_quality: String,
    #[diesel(sql_type = Timestamptz)]
    created_at: DateTime<Utc>,
    #[diesel(sql_type = Timestamptz)]
    updated_at: DateTime<Utc>,
    #[diesel(sql_type = Text)]
    anime_title: String,
    #[diesel(sql_type = Text)]
    anime_genre: String,
}

impl From<EpisodeSearchRow> for Episode {
    fn from(row: EpisodeSearchRow) -> Self {
        Episode {
            id: row.id,
            anime_id: row.anime_id,
            title: row.title,
            episode_number: row.episode_number,
            thumbnail_url: row.thumbnail_url,
            video_url_480p: row.video_url_480p,
            video_url_720p: row.video_url_720p,
            video_url_1080p: row.video_url_1080p,
            video_url_max_quality: row.video_url_max_quality,
            created_at: row.created_at,
            updated_at: row.updated_at,
            anime_title: Some(row.anime_title),
            anime_genre: Some(row.anime_genre),
        }
    }
}

/// Binds every parameter in placeholder order
fn prepare(statement: Statement) -> BoxedSqlQuery<'static, Pg, SqlQuery> {
    let mut query = diesel::sql_query(statement.sql).into_boxed::<Pg>();
    for param in statement.params {
        query = match param {
            SqlParam::Text(value) => query.bind::<Text, _>(value),
            SqlParam::Integer(value) => query.bind::<BigInt, _>(value),
        };
    }
    query
}

/// Runs rendered search statements on the Postgres pool
pub struct DieselSearchStore {
    db: Arc<Database>,
}

impl DieselSearchStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SearchStore for DieselSearchStore {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    async fn count(&self, statement: Statement) -> AppResult<u64> {
        let db = Arc::clone(&self.db);

        let row = task::spawn_blocking(move || -> AppResult<CountResult> {
            let mut conn = db.get_connection()?;
            Ok(prepare(statement).get_result::<CountResult>(&mut conn)?)
        })
        .await??;

        Ok(u64::try_from(row.count).unwrap_or_default())
    }

    async fn fetch_anime(&self, statement: Statement) -> AppResult<Vec<Anime>> {
        let db = Arc::clone(&self.db);
        let start = std::time::Instant::now();

        let rows = task::spawn_blocking(move || -> AppResult<Vec<AnimeModel>> {
            let mut conn = db.get_connection()?;
            Ok(prepare(statement).load::<AnimeModel>(&mut conn)?)
        })
        .await??;

        LogContext::db_operation("search", "anime", Some(start.elapsed().as_millis() as u64));
        Ok(rows.into_iter().map(Anime::from).collect())
    }

    async fn fetch_episodes(&self, statement: Statement) -> AppResult<Vec<Episode>> {
        let db = Arc::clone(&self.db);
        let start = std::time::Instant::now();

        let rows = task::spawn_blocking(move || -> AppResult<Vec<EpisodeSearchRow>> {
            let mut conn = db.get_connection()?;
            Ok(prepare(statement).load::<EpisodeSearchRow>(&mut conn)?)
        })
        .await??;

        LogContext::db_operation(
            "search",
            "episodes",
            Some(start.elapsed().as_millis() as u64),
        );
        Ok(rows.into_iter().map(Episode::from).collect())
    }
}
