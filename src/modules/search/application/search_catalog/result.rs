use serde::{Deserialize, Serialize};

use crate::modules::anime::Anime;
use crate::modules::episodes::Episode;
use crate::shared::application::pagination::PageMetadata;

/// Body of a search response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: Option<String>,
    pub genre: Option<String>,
    #[serde(rename = "type")]
    pub search_type: String,
    pub sort: String,
    pub fuzzy_search: bool,
    pub alternative_terms_used: Option<Vec<String>>,
    pub pagination: PageMetadata,
    pub results_this_page: usize,
    pub results: SearchResults,
}

/// Only the searched kinds are present
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anime: Option<Vec<Anime>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episodes: Option<Vec<Episode>>,
}

impl SearchResults {
    pub fn len(&self) -> usize {
        self.anime.as_ref().map_or(0, Vec::len) + self.episodes.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

impl CacheStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "HIT",
            CacheStatus::Miss => "MISS",
        }
    }
}

/// Serialized response body and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub body: String,
    pub cache: CacheStatus,
}

impl SearchOutcome {
    pub fn hit(body: String) -> Self {
        Self {
            body,
            cache: CacheStatus::Hit,
        }
    }

    pub fn miss(body: String) -> Self {
        Self {
            body,
            cache: CacheStatus::Miss,
        }
    }
}
