use axum::http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{json, Value};

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::shared::utils::Validator;

pub const X_CACHE: HeaderName = HeaderName::from_static("x-cache");

/// Body returned by create, update and delete operations
#[derive(Debug, Clone, Serialize)]
pub struct Acknowledgement {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl Acknowledgement {
    pub fn with_id(message: &'static str, id: i32) -> Self {
        Self {
            message,
            id: Some(id),
        }
    }

    pub fn message(message: &'static str) -> Self {
        Self { message, id: None }
    }
}

/// `Cache-Control` value for a public response cached for `max_age` seconds
pub fn cache_control(max_age: u64) -> HeaderValue {
    HeaderValue::from_str(&format!("public, max-age={}", max_age))
        .unwrap_or_else(|_| HeaderValue::from_static("public, max-age=60"))
}

/// JSON response with a weak ETag when the payload identifies a resource
pub fn json<T: Serialize>(status: StatusCode, data: &T) -> AppResult<Response> {
    let body = serde_json::to_string(data)?;
    let value = serde_json::to_value(data)?;
    Ok(raw_json(status, body, carries_identity(&value)))
}

/// Already-serialized JSON body
pub fn raw_json(status: StatusCode, body: String, with_etag: bool) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    if with_etag {
        if let Ok(etag) = HeaderValue::from_str(&weak_etag(&body)) {
            headers.insert(header::ETAG, etag);
        }
    }
    (status, headers, body).into_response()
}

/// `{ "error": message }` with the given status
pub fn error_body(status: StatusCode, message: &str) -> Response {
    raw_json(status, json!({ "error": message }).to_string(), false)
}

/// A payload is versioned when it has a truthy `id` or a `results` array
fn carries_identity(value: &Value) -> bool {
    let has_id = value.get("id").is_some_and(Validator::is_truthy);
    let has_results = value.get("results").is_some_and(Value::is_array);
    has_id || has_results
}

/// `W/"<hash>"` using a 31-multiplier rolling hash over UTF-16 code units,
/// printed as signed hexadecimal
pub fn weak_etag(body: &str) -> String {
    let hash = body
        .encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(i32::from(unit))
        });
    let hex = if hash < 0 {
        format!("-{:x}", (hash as i64).unsigned_abs())
    } else {
        format!("{:x}", hash)
    };
    format!("W/\"{}\"", hex)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            LogContext::error_with_context(&self, "Request failed");
        }

        match self {
            AppError::RateLimitError { retry_after } => {
                let body = json!({
                    "error": self.client_message(),
                    "retry_after": retry_after,
                });
                let mut response = raw_json(status, body.to_string(), false);
                response
                    .headers_mut()
                    .insert(header::RETRY_AFTER, HeaderValue::from(retry_after));
                response
            }
            _ => error_body(status, &self.client_message()),
        }
    }
}
