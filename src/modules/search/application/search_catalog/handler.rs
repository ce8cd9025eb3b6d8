use std::sync::Arc;

use async_trait::async_trait;

use super::query::SearchRequest;
use super::result::{SearchOutcome, SearchResponse, SearchResults};
use crate::modules::anime::Anime;
use crate::modules::episodes::Episode;
use crate::modules::search::application::cache_gate::CacheGate;
use crate::modules::search::application::ports::SearchStore;
use crate::modules::search::domain::{EntityKind, PatternSet, SearchPlan, SearchQuery};
use crate::shared::application::pagination::PageResult;
use crate::shared::application::use_case::Query;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::{LogContext, TimedOperation};

/// Cache lookup, validation, expansion, per-kind count and page, merge,
/// cache write.
///
/// Anime and episode searches are independent and run concurrently; within
/// one kind the count runs before the page.
pub struct SearchCatalogHandler {
    store: Arc<dyn SearchStore>,
    cache: CacheGate,
}

impl SearchCatalogHandler {
    pub fn new(store: Arc<dyn SearchStore>, cache: CacheGate) -> Self {
        Self { store, cache }
    }

    async fn search(&self, query: &SearchQuery) -> AppResult<SearchResponse> {
        let patterns = PatternSet::expand(query.text(), query.fuzzy);
        let plan_for = |entity: EntityKind| {
            query.includes(entity).then(|| {
                SearchPlan::new(
                    entity,
                    &patterns,
                    query.genre_filter(),
                    query.sort,
                    query.pagination,
                )
            })
        };
        let anime_plan = plan_for(EntityKind::Anime);
        let episode_plan = plan_for(EntityKind::Episodes);

        let (anime, episodes) = futures::try_join!(
            self.search_anime(anime_plan.as_ref(), query.text()),
            self.search_episodes(episode_plan.as_ref(), query.text()),
        )?;

        let total_anime = anime.as_ref().map_or(0, |page| page.total_count);
        let total_episodes = episodes.as_ref().map_or(0, |page| page.total_count);
        let results = SearchResults {
            anime: anime.map(|page| page.items),
            episodes: episodes.map(|page| page.items),
        };

        Ok(SearchResponse {
            query: query.query.clone(),
            genre: query.genre.clone(),
            search_type: query.type_label.clone(),
            sort: query.sort_label.clone(),
            fuzzy_search: query.fuzzy,
            alternative_terms_used: patterns.alternative_terms(),
            pagination: query.pagination.metadata(total_anime, total_episodes),
            results_this_page: results.len(),
            results,
        })
    }

    async fn search_anime(
        &self,
        plan: Option<&SearchPlan>,
        text: Option<&str>,
    ) -> AppResult<Option<PageResult<Anime>>> {
        let Some(plan) = plan else {
            return Ok(None);
        };
        let dialect = self.store.dialect();
        let total = self.store.count(plan.count_statement(dialect)).await?;
        let items = self.store.fetch_anime(plan.page_statement(dialect)).await?;
        LogContext::search_operation(text.unwrap_or_default(), Some("anime"), Some(total));
        Ok(Some(PageResult::new(items, total)))
    }

    async fn search_episodes(
        &self,
        plan: Option<&SearchPlan>,
        text: Option<&str>,
    ) -> AppResult<Option<PageResult<Episode>>> {
        let Some(plan) = plan else {
            return Ok(None);
        };
        let dialect = self.store.dialect();
        let total = self.store.count(plan.count_statement(dialect)).await?;
        let items = self
            .store
            .fetch_episodes(plan.page_statement(dialect))
            .await?;
        LogContext::search_operation(text.unwrap_or_default(), Some("episodes"), Some(total));
        Ok(Some(PageResult::new(items, total)))
    }
}

#[async_trait]
impl Query<SearchRequest, SearchOutcome> for SearchCatalogHandler {
    async fn execute(&self, request: SearchRequest) -> AppResult<SearchOutcome> {
        let key = CacheGate::key_for(&request.raw_query);
        if let Some(body) = self.cache.lookup(&key).await {
            return Ok(SearchOutcome::hit(body));
        }

        let query = SearchQuery::from_query_string(&request.raw_query)?;
        let timer = TimedOperation::new("catalog_search");
        let response = self.search(&query).await?;
        timer.finish_with_info(&format!("{} results", response.pagination.total_results));

        let body = serde_json::to_string(&response)?;
        self.cache.store(&key, &body).await;
        Ok(SearchOutcome::miss(body))
    }
}
