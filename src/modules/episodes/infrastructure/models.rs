use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::modules::episodes::domain::{Episode, EpisodeChanges, NewEpisode};
use crate::schema::episodes;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = episodes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EpisodeModel {
    pub id: i32,
    pub anime_id: i32,
    pub title: String,
    pub episode_number: i32,
    pub thumbnail_url: String,
    pub video_url_480p: Option<String>,
    pub video_url_720p: Option<String>,
    pub video_url_1080p: Option<String>,
    pub video_url_max_quality: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EpisodeModel {
    pub fn into_entity(self, anime_title: Option<String>, anime_genre: Option<String>) -> Episode {
        Episode {
            id: self.id,
            anime_id: self.anime_id,
            title: self.title,
            episode_number: self.episode_number,
            thumbnail_url: self.thumbnail_url,
            video_url_480p: self.video_url_480p,
            video_url_720p: self.video_url_720p,
            video_url_1080p: self.video_url_1080p,
            video_url_max_quality: self.video_url_max_quality,
            created_at: self.created_at,
            updated_at: self.updated_at,
            anime_title,
            anime_genre,
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = episodes)]
pub struct NewEpisodeModel {
    pub anime_id: i32,
    pub title: String,
    pub episode_number: i32,
    pub thumbnail_url: String,
    pub video_url_480p: Option<String>,
    pub video_url_720p: Option<String>,
    pub video_url_1080p: Option<String>,
    pub video_url_max_quality: String,
}

impl From<NewEpisode> for NewEpisodeModel {
    fn from(episode: NewEpisode) -> Self {
        Self {
            anime_id: episode.anime_id,
            title: episode.title,
            episode_number: episode.episode_number,
            thumbnail_url: episode.thumbnail_url,
            video_url_480p: episode.video_url_480p,
            video_url_720p: episode.video_url_720p,
            video_url_1080p: episode.video_url_1080p,
            video_url_max_quality: episode.video_url_max_quality,
        }
    }
}

/// `Some(None)` clears a nullable column; `None` leaves it alone
#[derive(AsChangeset, Debug)]
#[diesel(table_name = episodes)]
pub struct EpisodeChangeset {
    pub anime_id: Option<i32>,
    pub title: Option<String>,
    pub episode_number: Option<i32>,
    pub thumbnail_url: Option<String>,
    pub video_url_480p: Option<Option<String>>,
    pub video_url_720p: Option<Option<String>>,
    pub video_url_1080p: Option<Option<String>>,
    pub video_url_max_quality: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl EpisodeChangeset {
    pub fn new(changes: EpisodeChanges, now: DateTime<Utc>) -> Self {
        Self {
            anime_id: changes.anime_id,
            title: changes.title,
            episode_number: changes.episode_number,
            thumbnail_url: changes.thumbnail_url,
            video_url_480p: changes.video_url_480p,
            video_url_720p: changes.video_url_720p,
            video_url_1080p: changes.video_url_1080p,
            video_url_max_quality: changes.video_url_max_quality,
            updated_at: now,
        }
    }
}
