use std::sync::Arc;

use axum::extract::FromRef;

use crate::modules::anime::AnimeService;
use crate::modules::bulk::BulkCreateHandler;
use crate::modules::episodes::EpisodeService;
use crate::modules::search::SearchCatalogHandler;

/// Services shared by every route; handlers extract only the one they need
#[derive(Clone)]
pub struct AppState {
    pub anime: Arc<AnimeService>,
    pub episodes: Arc<EpisodeService>,
    pub bulk: Arc<BulkCreateHandler>,
    pub search: Arc<SearchCatalogHandler>,
}

impl FromRef<AppState> for Arc<AnimeService> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.anime)
    }
}

impl FromRef<AppState> for Arc<EpisodeService> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.episodes)
    }
}

impl FromRef<AppState> for Arc<BulkCreateHandler> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.bulk)
    }
}

impl FromRef<AppState> for Arc<SearchCatalogHandler> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.search)
    }
}
