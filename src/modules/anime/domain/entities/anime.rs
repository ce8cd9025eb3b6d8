use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// A catalog anime entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anime {
    pub id: i32,
    pub title: String,
    pub thumbnail_url: String,
    pub genre: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating an anime; every field may be missing until validated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimeDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl AnimeDraft {
    /// Title, thumbnail and genre are required and must be non-empty
    pub fn validate(self) -> AppResult<NewAnime> {
        Validator::require(
            Validator::has_text(self.title.as_deref())
                && Validator::has_text(self.thumbnail_url.as_deref())
                && Validator::has_text(self.genre.as_deref()),
        )?;

        Ok(NewAnime {
            title: self.title.unwrap_or_default(),
            thumbnail_url: self.thumbnail_url.unwrap_or_default(),
            genre: self.genre.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        })
    }
}

/// Validated anime ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnime {
    pub title: String,
    pub thumbnail_url: String,
    pub genre: String,
    pub description: String,
}

/// Partial update; absent fields keep their stored value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimeChanges {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
