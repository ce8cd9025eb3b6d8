use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::Response;

use super::application::AnimeService;
use super::domain::{AnimeChanges, AnimeDraft};
use crate::shared::config::CacheTtl;
use crate::shared::errors::AppResult;
use crate::shared::http::{self, cache_control, parse_json, Acknowledgement};
use crate::shared::utils::Validator;

/// GET /api/anime
pub async fn list_anime(State(service): State<Arc<AnimeService>>) -> AppResult<Response> {
    let anime = service.list().await?;
    let mut response = http::json(StatusCode::OK, &anime)?;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, cache_control(CacheTtl::GET_LIST));
    Ok(response)
}

/// GET /api/anime/:id
pub async fn get_anime(
    State(service): State<Arc<AnimeService>>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = Validator::parse_id(&id, "Anime")?;
    let anime = service.get(id).await?;
    let mut response = http::json(StatusCode::OK, &anime)?;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, cache_control(CacheTtl::GET_SINGLE));
    Ok(response)
}

/// POST /api/anime
pub async fn create_anime(
    State(service): State<Arc<AnimeService>>,
    body: Bytes,
) -> AppResult<Response> {
    let draft: AnimeDraft = parse_json(&body)?;
    let id = service.create(draft).await?;
    http::json(
        StatusCode::CREATED,
        &Acknowledgement::with_id("Anime created successfully", id),
    )
}

/// PUT /api/anime/:id
pub async fn update_anime(
    State(service): State<Arc<AnimeService>>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Response> {
    let id = Validator::parse_id(&id, "Anime")?;
    let changes: AnimeChanges = parse_json(&body)?;
    let id = service.update(id, changes).await?;
    http::json(
        StatusCode::OK,
        &Acknowledgement::with_id("Anime updated successfully", id),
    )
}

/// DELETE /api/anime/:id
pub async fn delete_anime(
    State(service): State<Arc<AnimeService>>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = Validator::parse_id(&id, "Anime")?;
    service.delete(id).await?;
    http::json(
        StatusCode::OK,
        &Acknowledgement::message("Anime and related episodes deleted successfully"),
    )
}
