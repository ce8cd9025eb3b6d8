/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use anime_catalog_lib::modules::anime::{Anime, AnimeDraft};
use anime_catalog_lib::modules::episodes::{Episode, EpisodeDraft};
use chrono::{TimeZone, Utc};

pub struct AnimeFactory {
    id: i32,
    title: String,
    genre: String,
    description: String,
}

impl Default for AnimeFactory {
    fn default() -> Self {
        Self {
            id: 1,
            title: "Attack on Titan".to_string(),
            genre: "Action".to_string(),
            description: "Humanity fights for survival behind the walls".to_string(),
        }
    }
}

impl AnimeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_genre(mut self, genre: &str) -> Self {
        self.genre = genre.to_string();
        self
    }

    pub fn build(self) -> Anime {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        Anime {
            id: self.id,
            thumbnail_url: format!("https://img.example/anime/{}.jpg", self.id),
            title: self.title,
            genre: self.genre,
            description: self.description,
            created_at: created,
            updated_at: created,
        }
    }

    pub fn draft(self) -> AnimeDraft {
        AnimeDraft {
            thumbnail_url: Some(format!("https://img.example/anime/{}.jpg", self.id)),
            title: Some(self.title),
            genre: Some(self.genre),
            description: Some(self.description),
        }
    }
}

pub struct EpisodeFactory {
    id: i32,
    anime_id: i32,
    title: String,
    episode_number: i32,
}

impl Default for EpisodeFactory {
    fn default() -> Self {
        Self {
            id: 1,
            anime_id: 1,
            title: "To You, in 2000 Years".to_string(),
            episode_number: 1,
        }
    }
}

impl EpisodeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn for_anime(mut self, anime_id: i32) -> Self {
        self.anime_id = anime_id;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_number(mut self, episode_number: i32) -> Self {
        self.episode_number = episode_number;
        self
    }

    pub fn build(self) -> Episode {
        let created = Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap();
        Episode {
            id: self.id,
            anime_id: self.anime_id,
            title: self.title,
            episode_number: self.episode_number,
            thumbnail_url: format!("https://img.example/episodes/{}.jpg", self.id),
            video_url_480p: None,
            video_url_720p: None,
            video_url_1080p: None,
            video_url_max_quality: format!("https://video.example/{}/max.mp4", self.id),
            created_at: created,
            updated_at: created,
            anime_title: None,
            anime_genre: None,
        }
    }

    pub fn draft(self) -> EpisodeDraft {
        EpisodeDraft {
            anime_id: Some(self.anime_id),
            title: Some(self.title),
            episode_number: Some(self.episode_number),
            thumbnail_url: Some(format!("https://img.example/episodes/{}.jpg", self.id)),
            video_url_480p: None,
            video_url_720p: None,
            video_url_1080p: None,
            video_url_max_quality: Some(format!("https://video.example/{}/max.mp4", self.id)),
        }
    }
}
