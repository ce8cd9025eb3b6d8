use axum::http::{header, HeaderMap, StatusCode};
use axum::response::Response;
use serde::Serialize;

use crate::shared::config::CacheTtl;
use crate::shared::errors::AppResult;
use crate::shared::http::{self, cache_control};

#[derive(Debug, Serialize)]
pub struct ApiDocs {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub base_url: String,
    pub endpoints: Vec<Endpoint>,
    pub authentication: Authentication,
}

#[derive(Debug, Serialize)]
pub struct Endpoint {
    pub path: &'static str,
    pub methods: &'static [&'static str],
    pub description: &'static str,
    #[serde(skip_serializing_if = "no_parameters")]
    pub parameters: &'static [Parameter],
    pub auth_required: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Parameter {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Authentication {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub header: &'static str,
    pub key: &'static str,
}

fn no_parameters(parameters: &&'static [Parameter]) -> bool {
    parameters.is_empty()
}

const fn query_param(name: &'static str, description: &'static str) -> Parameter {
    Parameter {
        name,
        kind: "query",
        description,
    }
}

const EPISODE_PARAMETERS: &[Parameter] =
    &[query_param("anime_id", "Filter episodes by anime ID")];

const SEARCH_PARAMETERS: &[Parameter] = &[
    query_param("q", "Search query"),
    query_param("type", "Result type: 'all', 'anime', or 'episodes'"),
    query_param("genre", "Filter by genre"),
    query_param(
        "sort",
        "Sort results: 'relevance', 'newest', 'oldest', 'title_asc', 'title_desc'",
    ),
    query_param("page", "Page number for pagination"),
    query_param("limit", "Results per page (max 100)"),
    query_param("fuzzy", "Enable/disable fuzzy search ('true' or 'false')"),
];

impl ApiDocs {
    pub fn new(origin: &str) -> Self {
        Self {
            name: "Anime API",
            version: env!("CARGO_PKG_VERSION"),
            description: "API for anime and episodes management",
            base_url: format!("{}/api", origin),
            endpoints: vec![
                Endpoint {
                    path: "/api/anime",
                    methods: &["GET", "POST"],
                    description: "Get all anime or create a new anime",
                    parameters: &[],
                    auth_required: &["POST"],
                },
                Endpoint {
                    path: "/api/anime/:id",
                    methods: &["GET", "PUT", "DELETE"],
                    description: "Get, update or delete a specific anime",
                    parameters: &[],
                    auth_required: &["PUT", "DELETE"],
                },
                Endpoint {
                    path: "/api/episodes",
                    methods: &["GET", "POST"],
                    description: "Get all episodes or create a new episode",
                    parameters: EPISODE_PARAMETERS,
                    auth_required: &["POST"],
                },
                Endpoint {
                    path: "/api/episodes/:id",
                    methods: &["GET", "PUT", "DELETE"],
                    description: "Get, update or delete a specific episode",
                    parameters: &[],
                    auth_required: &["PUT", "DELETE"],
                },
                Endpoint {
                    path: "/api/search",
                    methods: &["GET"],
                    description: "Search for anime and episodes",
                    parameters: SEARCH_PARAMETERS,
                    auth_required: &[],
                },
                Endpoint {
                    path: "/api/bulk/:resource",
                    methods: &["POST"],
                    description: "Perform bulk operations on anime or episodes",
                    parameters: &[],
                    auth_required: &["POST"],
                },
            ],
            authentication: Authentication {
                kind: "API Key",
                header: "X-API-Key",
                key: "Required for all POST, PUT, DELETE operations",
            },
        }
    }
}

/// Origin the client used to reach us, from the `Host` header
fn origin(headers: &HeaderMap) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");
    format!("http://{}", host)
}

/// GET /api and /api/docs
pub async fn api_docs(headers: HeaderMap) -> AppResult<Response> {
    let mut response = http::json(StatusCode::OK, &ApiDocs::new(&origin(&headers)))?;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, cache_control(CacheTtl::DOCS));
    Ok(response)
}
