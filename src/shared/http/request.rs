use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::shared::errors::{AppError, AppResult};

/// Decode a JSON request body
pub fn parse_json<T: DeserializeOwned>(body: &Bytes) -> AppResult<T> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::InvalidInput(format!("Invalid JSON body: {}", e)))
}
