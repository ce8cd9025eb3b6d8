use std::sync::Arc;

use axum::http::{StatusCode, Uri};
use axum::middleware;
use axum::response::Response;
use axum::routing::{get, post, MethodRouter};
use axum::Router;

use super::docs::api_docs;
use super::state::AppState;
use crate::modules::anime::handlers as anime;
use crate::modules::bulk::handlers as bulk;
use crate::modules::episodes::handlers as episodes;
use crate::modules::search::handlers as search;
use crate::shared::http::{error_body, guard, AccessPolicy};

/// Every route of the API behind the access guard
pub fn build_router(state: AppState, policy: Arc<AccessPolicy>) -> Router {
    Router::new()
        .route(
            "/api/anime",
            resource(get(anime::list_anime).post(anime::create_anime)),
        )
        .route(
            "/api/anime/:id",
            resource(
                get(anime::get_anime)
                    .put(anime::update_anime)
                    .delete(anime::delete_anime),
            ),
        )
        .route(
            "/api/episodes",
            resource(get(episodes::list_episodes).post(episodes::create_episode)),
        )
        .route(
            "/api/episodes/:id",
            resource(
                get(episodes::get_episode)
                    .put(episodes::update_episode)
                    .delete(episodes::delete_episode),
            ),
        )
        .route(
            "/api/bulk/:resource",
            post(bulk::bulk_create).fallback(bulk::bulk_method_not_allowed),
        )
        .route("/api/search", resource(get(search::search)))
        .route("/api", resource(get(api_docs)))
        .route("/api/docs", resource(get(api_docs)))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(policy, guard))
        .with_state(state)
}

fn resource(methods: MethodRouter<AppState>) -> MethodRouter<AppState> {
    methods.fallback(method_not_allowed)
}

async fn method_not_allowed() -> Response {
    error_body(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn not_found(uri: Uri) -> Response {
    let message = if uri.path().starts_with("/api/") {
        "Invalid resource"
    } else {
        "Not found"
    };
    error_body(StatusCode::NOT_FOUND, message)
}
