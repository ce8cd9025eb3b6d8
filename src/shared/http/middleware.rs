use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::response::cache_control;
use crate::shared::config::CacheTtl;
use crate::shared::errors::AppError;
use crate::shared::utils::WriteRateLimiter;

pub const X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");
const CF_CONNECTING_IP: HeaderName = HeaderName::from_static("cf-connecting-ip");
const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

/// Who may write, and how often
pub struct AccessPolicy {
    api_key: String,
    limiter: WriteRateLimiter,
}

impl AccessPolicy {
    pub fn new(api_key: impl Into<String>, writes_per_minute: u32) -> Self {
        Self {
            api_key: api_key.into(),
            limiter: WriteRateLimiter::per_minute(writes_per_minute),
        }
    }

    fn authorized(&self, headers: &HeaderMap) -> bool {
        headers
            .get(X_API_KEY)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|key| key == self.api_key)
    }
}

/// Client address used for rate limiting
pub fn client_ip(headers: &HeaderMap) -> String {
    let header_value = |name: &HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.split(',').next().unwrap_or(value).trim().to_string())
            .filter(|value| !value.is_empty())
    };

    header_value(&CF_CONNECTING_IP)
        .or_else(|| header_value(&X_FORWARDED_FOR))
        .unwrap_or_else(|| "unknown".to_string())
}

/// Rate limiting, preflight, API key check and CORS for every request
pub async fn guard(
    State(policy): State<Arc<AccessPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let response = match admit(&policy, &request) {
        Ok(()) => next.run(request).await,
        Err(rejection) => rejection,
    };
    with_cors(response)
}

/// Writes are counted before anything else, so rejected writes still use
/// up the client's budget
fn admit(policy: &AccessPolicy, request: &Request) -> Result<(), Response> {
    let method = request.method();

    if *method != Method::GET && *method != Method::OPTIONS {
        policy
            .limiter
            .check(&client_ip(request.headers()))
            .map_err(IntoResponse::into_response)?;
    }

    if *method == Method::OPTIONS {
        return Err(StatusCode::NO_CONTENT.into_response());
    }

    if *method != Method::GET
        && request.uri().path().starts_with("/api/")
        && !policy.authorized(request.headers())
    {
        return Err(
            AppError::Unauthorized("Unauthorized. API key required.".to_string()).into_response(),
        );
    }

    Ok(())
}

/// CORS headers plus the default one-minute `Cache-Control`
pub fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization, X-API-Key"),
    );
    headers.insert(header::VARY, HeaderValue::from_static("Origin, X-API-Key"));
    if !headers.contains_key(header::CACHE_CONTROL) {
        headers.insert(header::CACHE_CONTROL, cache_control(CacheTtl::DEFAULT_HTTP));
    }
    response
}
