use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::Response;

use super::application::{SearchCatalogHandler, SearchRequest};
use crate::shared::config::CacheTtl;
use crate::shared::application::use_case::Query;
use crate::shared::errors::AppResult;
use crate::shared::http::{self, cache_control, X_CACHE};

/// GET /api/search
pub async fn search(
    State(handler): State<Arc<SearchCatalogHandler>>,
    RawQuery(raw): RawQuery,
) -> AppResult<Response> {
    let request = SearchRequest::from_uri_query(raw.as_deref());
    let outcome = handler.execute(request).await?;

    let mut response = http::raw_json(StatusCode::OK, outcome.body, false);
    let headers = response.headers_mut();
    headers.insert(X_CACHE, HeaderValue::from_static(outcome.cache.as_str()));
    headers.insert(header::CACHE_CONTROL, cache_control(CacheTtl::SEARCH));
    Ok(response)
}
