use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use super::application::{BulkCreateCommand, BulkCreateHandler};
use crate::shared::application::use_case::UseCase;
use crate::shared::errors::AppResult;
use crate::shared::http::{self, error_body};

/// POST /api/bulk/:resource
pub async fn bulk_create(
    State(handler): State<Arc<BulkCreateHandler>>,
    Path(resource): Path<String>,
    body: Bytes,
) -> AppResult<Response> {
    let command = BulkCreateCommand::from_request(&resource, &body)?;
    let result = handler.execute(command).await?;
    http::json(StatusCode::OK, &result)
}

/// Any other method on /api/bulk/:resource
pub async fn bulk_method_not_allowed() -> Response {
    error_body(
        StatusCode::METHOD_NOT_ALLOWED,
        "Only POST method is supported for bulk operations",
    )
}
