//! Bulk create tests
//!
//! Items are created independently; failures are reported next to successes.

mod utils;

use std::sync::Arc;

use axum::body::{to_bytes, Bytes};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{json, Value};

use anime_catalog_lib::modules::anime::AnimeService;
use anime_catalog_lib::modules::bulk::handlers::{bulk_create, bulk_method_not_allowed};
use anime_catalog_lib::modules::bulk::{BulkCreateCommand, BulkCreateHandler};
use anime_catalog_lib::modules::episodes::EpisodeService;
use anime_catalog_lib::shared::application::use_case::UseCase;
use utils::factories::AnimeFactory;
use utils::fakes::{InMemoryAnimeRepository, InMemoryEpisodeRepository};

fn bulk_handler() -> Arc<BulkCreateHandler> {
    let anime_repo = Arc::new(InMemoryAnimeRepository::with(vec![AnimeFactory::new().build()]));
    let episode_repo = Arc::new(InMemoryEpisodeRepository::default());
    let anime_service = Arc::new(AnimeService::new(anime_repo.clone()));
    let episode_service = Arc::new(EpisodeService::new(episode_repo, anime_repo));
    Arc::new(BulkCreateHandler::new(anime_service, episode_service))
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_partial_success_is_reported() {
    let handler = bulk_handler();
    let body = json!({
        "operation": "create",
        "items": [
            {"title": "Naruto", "thumbnail_url": "https://img/naruto.jpg", "genre": "Action"},
            {"title": "No genre", "thumbnail_url": "https://img/x.jpg"},
            "not an object"
        ]
    });
    let command = BulkCreateCommand::from_request("anime", body.to_string().as_bytes()).unwrap();

    let result = handler.execute(command).await.unwrap();

    assert_eq!(result.operation, "bulk_create");
    assert_eq!(result.resource, "anime");
    assert_eq!(result.results.len(), 1);
    assert_eq!(result.results[0].id, 2);
    assert!(result.results[0].success);
    assert_eq!(result.errors.len(), 2);
    assert_eq!(result.errors[0].error, "Missing required fields");
    assert_eq!(result.errors[0].item["title"], "No genre");
    assert_eq!(result.summary.total, 3);
    assert_eq!(result.summary.successful, 1);
    assert_eq!(result.summary.failed, 2);
}

#[tokio::test]
async fn test_episode_items_check_their_anime() {
    let handler = bulk_handler();
    let body = json!({
        "operation": "create",
        "items": [
            {
                "anime_id": 1, "title": "Pilot", "episode_number": 1,
                "thumbnail_url": "https://img/1.jpg", "video_url_max_quality": "https://v/1.mp4"
            },
            {
                "anime_id": 7, "title": "Orphan", "episode_number": 1,
                "thumbnail_url": "https://img/2.jpg", "video_url_max_quality": "https://v/2.mp4"
            }
        ]
    });
    let command =
        BulkCreateCommand::from_request("episodes", body.to_string().as_bytes()).unwrap();

    let result = handler.execute(command).await.unwrap();

    assert_eq!(result.summary.successful, 1);
    assert_eq!(result.errors[0].error, "Associated anime not found");
}

#[tokio::test]
async fn test_http_handler_returns_ok_with_etag() {
    let body = json!({"operation": "create", "items": []}).to_string();

    let response = bulk_create(
        State(bulk_handler()),
        Path("anime".to_string()),
        Bytes::from(body),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("etag").is_some());
    let value = json_body(response).await;
    assert_eq!(value["summary"]["total"], 0);
}

#[tokio::test]
async fn test_http_handler_rejects_bad_requests() {
    let malformed = bulk_create(
        State(bulk_handler()),
        Path("anime".to_string()),
        Bytes::from_static(b"{not json"),
    )
    .await
    .unwrap_err()
    .into_response();
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(malformed).await["error"], "Invalid request format");

    let body = json!({"operation": "delete", "items": []}).to_string();
    let unsupported = bulk_create(
        State(bulk_handler()),
        Path("anime".to_string()),
        Bytes::from(body),
    )
    .await
    .unwrap_err()
    .into_response();
    assert_eq!(json_body(unsupported).await["error"], "Unsupported bulk operation");
}

#[tokio::test]
async fn test_other_methods_are_refused() {
    let response = bulk_method_not_allowed().await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        json_body(response).await["error"],
        "Only POST method is supported for bulk operations"
    );
}
