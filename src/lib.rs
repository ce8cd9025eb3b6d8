pub mod modules;
pub mod routes;
mod schema;
pub mod shared;

use std::sync::Arc;

use axum::Router;

use modules::{
    anime::{AnimeRepository, AnimeRepositoryImpl, AnimeService},
    bulk::BulkCreateHandler,
    episodes::{EpisodeRepository, EpisodeRepositoryImpl, EpisodeService},
    search::{
        CacheGate, DieselSearchStore, MemorySearchCache, RedisSearchCache, SearchCache,
        SearchCatalogHandler, SearchStore,
    },
};
use routes::AppState;
use shared::errors::AppResult;
use shared::http::AccessPolicy;
use shared::{AppConfig, CacheTtl, Database};

/// Connect to the database, apply migrations and wire every service into the router
pub fn build_app(config: &AppConfig) -> AppResult<Router> {
    let database = Arc::new(Database::new(&config.database_url)?);
    database.run_migrations()?;

    let anime_repo: Arc<dyn AnimeRepository> =
        Arc::new(AnimeRepositoryImpl::new(Arc::clone(&database)));
    let episode_repo: Arc<dyn EpisodeRepository> =
        Arc::new(EpisodeRepositoryImpl::new(Arc::clone(&database)));
    let search_store: Arc<dyn SearchStore> =
        Arc::new(DieselSearchStore::new(Arc::clone(&database)));

    let anime_service = Arc::new(AnimeService::new(Arc::clone(&anime_repo)));
    let episode_service = Arc::new(EpisodeService::new(
        Arc::clone(&episode_repo),
        Arc::clone(&anime_repo),
    ));
    let bulk_handler = Arc::new(BulkCreateHandler::new(
        Arc::clone(&anime_service),
        Arc::clone(&episode_service),
    ));
    let search_handler = Arc::new(SearchCatalogHandler::new(
        search_store,
        CacheGate::new(search_cache(config)?, CacheTtl::SEARCH),
    ));

    let state = AppState {
        anime: anime_service,
        episodes: episode_service,
        bulk: bulk_handler,
        search: search_handler,
    };
    let policy = Arc::new(AccessPolicy::new(
        config.api_key.clone(),
        config.write_rate_limit_per_minute,
    ));

    Ok(routes::build_router(state, policy))
}

/// Redis when configured, otherwise a process-local cache
fn search_cache(config: &AppConfig) -> AppResult<Arc<dyn SearchCache>> {
    match &config.redis_url {
        Some(url) => {
            log::info!("Search cache: Redis");
            Ok(Arc::new(RedisSearchCache::new(url)?))
        }
        None => {
            log::info!("Search cache: in-memory (REDIS_URL not set)");
            Ok(Arc::new(MemorySearchCache::new()))
        }
    }
}
