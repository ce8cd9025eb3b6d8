use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::modules::anime::domain::{Anime, AnimeChanges, NewAnime};
use crate::schema::anime;

/// Row of the `anime` table; also loadable from raw search statements
#[derive(Queryable, QueryableByName, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = anime)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AnimeModel {
    pub id: i32,
    pub title: String,
    pub thumbnail_url: String,
    pub genre: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AnimeModel> for Anime {
    fn from(model: AnimeModel) -> Self {
        Anime {
            id: model.id,
            title: model.title,
            thumbnail_url: model.thumbnail_url,
            genre: model.genre,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = anime)]
pub struct NewAnimeModel {
    pub title: String,
    pub thumbnail_url: String,
    pub genre: String,
    pub description: String,
}

impl From<NewAnime> for NewAnimeModel {
    fn from(anime: NewAnime) -> Self {
        Self {
            title: anime.title,
            thumbnail_url: anime.thumbnail_url,
            genre: anime.genre,
            description: anime.description,
        }
    }
}

/// Only `Some` fields are written; `updated_at` is always refreshed
#[derive(AsChangeset, Debug)]
#[diesel(table_name = anime)]
pub struct AnimeChangeset {
    pub title: Option<String>,
    pub thumbnail_url: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl AnimeChangeset {
    pub fn new(changes: AnimeChanges, now: DateTime<Utc>) -> Self {
        Self {
            title: changes.title,
            thumbnail_url: changes.thumbnail_url,
            genre: changes.genre,
            description: changes.description,
            updated_at: now,
        }
    }
}
