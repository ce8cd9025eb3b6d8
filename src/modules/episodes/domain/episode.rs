use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// An episode of a catalog anime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
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
    /// Title of the parent anime, present on joined reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anime_title: Option<String>,
    /// Genre of the parent anime, present on search results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anime_genre: Option<String>,
}

/// Request body for creating an episode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeDraft {
    #[serde(default)]
    pub anime_id: Option<i32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub episode_number: Option<i32>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub video_url_480p: Option<String>,
    #[serde(default)]
    pub video_url_720p: Option<String>,
    #[serde(default)]
    pub video_url_1080p: Option<String>,
    #[serde(default)]
    pub video_url_max_quality: Option<String>,
}

impl EpisodeDraft {
    /// Anime, title, a non-zero episode number, thumbnail and the
    /// max-quality video are required. Empty optional URLs are stored as NULL.
    pub fn validate(self) -> AppResult<NewEpisode> {
        Validator::require(
            Validator::has_number(self.anime_id)
                && Validator::has_text(self.title.as_deref())
                && Validator::has_number(self.episode_number)
                && Validator::has_text(self.thumbnail_url.as_deref())
                && Validator::has_text(self.video_url_max_quality.as_deref()),
        )?;

        Ok(NewEpisode {
            anime_id: self.anime_id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            episode_number: self.episode_number.unwrap_or_default(),
            thumbnail_url: self.thumbnail_url.unwrap_or_default(),
            video_url_480p: self.video_url_480p.filter(|url| !url.is_empty()),
            video_url_720p: self.video_url_720p.filter(|url| !url.is_empty()),
            video_url_1080p: self.video_url_1080p.filter(|url| !url.is_empty()),
            video_url_max_quality: self.video_url_max_quality.unwrap_or_default(),
        })
    }
}

/// Validated episode ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewEpisode {
    pub anime_id: i32,
    pub title: String,
    pub episode_number: i32,
    pub thumbnail_url: String,
    pub video_url_480p: Option<String>,
    pub video_url_720p: Option<String>,
    pub video_url_1080p: Option<String>,
    pub video_url_max_quality: String,
}

/// Partial update. The optional video URLs distinguish a missing field
/// (unchanged) from an explicit `null` (cleared).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EpisodeChanges {
    #[serde(default)]
    pub anime_id: Option<i32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub episode_number: Option<i32>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub video_url_480p: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub video_url_720p: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub video_url_1080p: Option<Option<String>>,
    #[serde(default)]
    pub video_url_max_quality: Option<String>,
}

fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> EpisodeDraft {
        EpisodeDraft {
            anime_id: Some(1),
            title: Some("The Boy in the Iceberg".into()),
            episode_number: Some(1),
            thumbnail_url: Some("https://img/1.jpg".into()),
            video_url_480p: Some(String::new()),
            video_url_720p: None,
            video_url_1080p: Some("https://video/1080.mp4".into()),
            video_url_max_quality: Some("https://video/max.mp4".into()),
        }
    }

    #[test]
    fn test_valid_draft_normalizes_empty_urls() {
        let episode = complete_draft().validate().unwrap();
        assert_eq!(episode.video_url_480p, None);
        assert_eq!(episode.video_url_1080p.as_deref(), Some("https://video/1080.mp4"));
    }

    #[test]
    fn test_episode_number_zero_is_missing() {
        let draft = EpisodeDraft {
            episode_number: Some(0),
            ..complete_draft()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.client_message(), "Missing required fields");
    }

    #[test]
    fn test_changes_distinguish_null_from_missing() {
        let changes: EpisodeChanges =
            serde_json::from_str(r#"{"video_url_480p":null,"title":"Renamed"}"#).unwrap();
        assert_eq!(changes.video_url_480p, Some(None));
        assert_eq!(changes.video_url_720p, None);
        assert_eq!(changes.title.as_deref(), Some("Renamed"));
    }

    #[test]
    fn test_joined_fields_are_omitted_when_absent() {
        let episode = Episode {
            id: 1,
            anime_id: 1,
            title: "Pilot".into(),
            episode_number: 1,
            thumbnail_url: "t".into(),
            video_url_480p: None,
            video_url_720p: None,
            video_url_1080p: None,
            video_url_max_quality: "v".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            anime_title: None,
            anime_genre: None,
        };
        let value = serde_json::to_value(&episode).unwrap();
        assert!(value.get("anime_title").is_none());
        assert!(value.get("video_url_480p").unwrap().is_null());
    }
}
