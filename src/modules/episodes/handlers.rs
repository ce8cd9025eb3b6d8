use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use serde::Deserialize;

use super::application::EpisodeService;
use super::domain::{EpisodeChanges, EpisodeDraft};
use crate::shared::config::CacheTtl;
use crate::shared::errors::AppResult;
use crate::shared::http::{self, cache_control, parse_json, Acknowledgement};
use crate::shared::utils::Validator;

#[derive(Debug, Deserialize)]
pub struct EpisodeListParams {
    pub anime_id: Option<String>,
}

/// GET /api/episodes[?anime_id=N]
pub async fn list_episodes(
    State(service): State<Arc<EpisodeService>>,
    Query(params): Query<EpisodeListParams>,
) -> AppResult<Response> {
    let episodes = service.list(params.anime_id.as_deref()).await?;
    let mut response = http::json(StatusCode::OK, &episodes)?;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, cache_control(CacheTtl::GET_LIST));
    Ok(response)
}

/// GET /api/episodes/:id
pub async fn get_episode(
    State(service): State<Arc<EpisodeService>>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = Validator::parse_id(&id, "Episode")?;
    let episode = service.get(id).await?;
    let mut response = http::json(StatusCode::OK, &episode)?;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, cache_control(CacheTtl::GET_SINGLE));
    Ok(response)
}

/// POST /api/episodes
pub async fn create_episode(
    State(service): State<Arc<EpisodeService>>,
    body: Bytes,
) -> AppResult<Response> {
    let draft: EpisodeDraft = parse_json(&body)?;
    let id = service.create(draft).await?;
    http::json(
        StatusCode::CREATED,
        &Acknowledgement::with_id("Episode created successfully", id),
    )
}

/// PUT /api/episodes/:id
pub async fn update_episode(
    State(service): State<Arc<EpisodeService>>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Response> {
    let id = Validator::parse_id(&id, "Episode")?;
    let changes: EpisodeChanges = parse_json(&body)?;
    let id = service.update(id, changes).await?;
    http::json(
        StatusCode::OK,
        &Acknowledgement::with_id("Episode updated successfully", id),
    )
}

/// DELETE /api/episodes/:id
pub async fn delete_episode(
    State(service): State<Arc<EpisodeService>>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = Validator::parse_id(&id, "Episode")?;
    service.delete(id).await?;
    http::json(
        StatusCode::OK,
        &Acknowledgement::message("Episode deleted successfully"),
    )
}
