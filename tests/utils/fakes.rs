/// In-memory stand-ins for the persistence and cache ports
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use anime_catalog_lib::modules::anime::{Anime, AnimeChanges, AnimeRepository, NewAnime};
use anime_catalog_lib::modules::episodes::{
    Episode, EpisodeChanges, EpisodeRepository, NewEpisode,
};
use anime_catalog_lib::modules::search::domain::{Dialect, Statement};
use anime_catalog_lib::modules::search::{SearchCache, SearchStore};
use anime_catalog_lib::shared::errors::{AppError, AppResult};

#[derive(Default)]
pub struct InMemoryAnimeRepository {
    rows: Mutex<Vec<Anime>>,
}

impl InMemoryAnimeRepository {
    pub fn with(rows: Vec<Anime>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

#[async_trait]
impl AnimeRepository for InMemoryAnimeRepository {
    async fn find_all(&self) -> AppResult<Vec<Anime>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Anime>> {
        Ok(self.rows.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|a| a.id == id))
    }

    async fn create(&self, anime: NewAnime) -> AppResult<i32> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        rows.push(Anime {
            id,
            title: anime.title,
            thumbnail_url: anime.thumbnail_url,
            genre: anime.genre,
            description: anime.description,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });
        Ok(id)
    }

    async fn update(&self, id: i32, changes: AnimeChanges) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(anime) = rows.iter_mut().find(|a| a.id == id) {
            if let Some(title) = changes.title {
                anime.title = title;
            }
            if let Some(genre) = changes.genre {
                anime.genre = genre;
            }
            anime.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.rows.lock().unwrap().retain(|a| a.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryEpisodeRepository {
    rows: Mutex<Vec<Episode>>,
}

impl InMemoryEpisodeRepository {
    pub fn with(rows: Vec<Episode>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }

    pub fn snapshot(&self) -> Vec<Episode> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl EpisodeRepository for InMemoryEpisodeRepository {
    async fn find_all(&self, anime_id: Option<i32>) -> AppResult<Vec<Episode>> {
        let mut rows: Vec<Episode> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|e| anime_id.map_or(true, |id| e.anime_id == id))
            .cloned()
            .collect();
        rows.sort_by_key(|e| (e.anime_id, e.episode_number));
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Episode>> {
        Ok(self.rows.lock().unwrap().iter().find(|e| e.id == id).cloned())
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|e| e.id == id))
    }

    async fn create(&self, episode: NewEpisode) -> AppResult<i32> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        rows.push(Episode {
            id,
            anime_id: episode.anime_id,
            title: episode.title,
            episode_number: episode.episode_number,
            thumbnail_url: episode.thumbnail_url,
            video_url_480p: episode.video_url_480p,
            video_url_720p: episode.video_url_720p,
            video_url_1080p: episode.video_url_1080p,
            video_url_max_quality: episode.video_url_max_quality,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            anime_title: None,
            anime_genre: None,
        });
        Ok(id)
    }

    async fn update(&self, id: i32, changes: EpisodeChanges) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(episode) = rows.iter_mut().find(|e| e.id == id) {
            if let Some(anime_id) = changes.anime_id {
                episode.anime_id = anime_id;
            }
            if let Some(title) = changes.title {
                episode.title = title;
            }
            if let Some(url) = changes.video_url_480p {
                episode.video_url_480p = url;
            }
            episode.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.rows.lock().unwrap().retain(|e| e.id != id);
        Ok(())
    }
}

/// Search store returning canned rows and recording every statement it runs
#[derive(Default)]
pub struct FakeSearchStore {
    pub anime: Vec<Anime>,
    pub episodes: Vec<Episode>,
    pub anime_total: u64,
    pub episode_total: u64,
    statements: Mutex<Vec<Statement>>,
    calls: AtomicUsize,
}

impl FakeSearchStore {
    pub fn new(anime: Vec<Anime>, episodes: Vec<Episode>) -> Self {
        Self {
            anime_total: anime.len() as u64,
            episode_total: episodes.len() as u64,
            anime,
            episodes,
            ..Self::default()
        }
    }

    pub fn with_totals(mut self, anime_total: u64, episode_total: u64) -> Self {
        self.anime_total = anime_total;
        self.episode_total = episode_total;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn statements(&self) -> Vec<Statement> {
        self.statements.lock().unwrap().clone()
    }

    fn record(&self, statement: Statement) -> Statement {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.statements.lock().unwrap().push(statement.clone());
        statement
    }
}

#[async_trait]
impl SearchStore for FakeSearchStore {
    fn dialect(&self) -> Dialect {
        Dialect::Generic
    }

    async fn count(&self, statement: Statement) -> AppResult<u64> {
        let statement = self.record(statement);
        if statement.sql.contains("FROM episodes") {
            Ok(self.episode_total)
        } else {
            Ok(self.anime_total)
        }
    }

    async fn fetch_anime(&self, statement: Statement) -> AppResult<Vec<Anime>> {
        self.record(statement);
        Ok(self.anime.clone())
    }

    async fn fetch_episodes(&self, statement: Statement) -> AppResult<Vec<Episode>> {
        self.record(statement);
        Ok(self.episodes.clone())
    }
}

/// Cache whose backend is always down
pub struct UnavailableCache;

#[async_trait]
impl SearchCache for UnavailableCache {
    async fn get(&self, _key: &str) -> AppResult<Option<String>> {
        Err(AppError::CacheError("Redis connection failed".to_string()))
    }

    async fn put(&self, _key: &str, _value: &str, _ttl_secs: u64) -> AppResult<()> {
        Err(AppError::CacheError("Redis connection failed".to_string()))
    }
}

