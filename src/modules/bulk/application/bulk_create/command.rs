use serde_json::Value;

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// Entity kinds accepted by bulk operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkResource {
    Anime,
    Episodes,
}

impl BulkResource {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "anime" => Some(BulkResource::Anime),
            "episodes" => Some(BulkResource::Episodes),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BulkResource::Anime => "anime",
            BulkResource::Episodes => "episodes",
        }
    }
}

/// Command for inserting many rows of one resource
#[derive(Debug, Clone)]
pub struct BulkCreateCommand {
    pub resource: BulkResource,
    pub items: Vec<Value>,
}

impl BulkCreateCommand {
    /// Parse `{ "operation": "create", "items": [...] }` for `resource`.
    ///
    /// The body shape is checked before the operation and resource are.
    pub fn from_request(resource: &str, body: &[u8]) -> AppResult<Self> {
        let invalid = || AppError::InvalidInput("Invalid request format".to_string());
        let unsupported = || AppError::InvalidInput("Unsupported bulk operation".to_string());

        let request: Value = serde_json::from_slice(body).map_err(|_| invalid())?;
        let operation = request.get("operation").filter(|op| Validator::is_truthy(op));
        let items = request.get("items").and_then(Value::as_array);

        let (Some(operation), Some(items)) = (operation, items) else {
            return Err(invalid());
        };

        if operation.as_str() != Some("create") {
            return Err(unsupported());
        }
        let resource = BulkResource::parse(resource).ok_or_else(unsupported)?;

        Ok(Self {
            resource,
            items: items.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_create_request() {
        let command =
            BulkCreateCommand::from_request("anime", br#"{"operation":"create","items":[{},{}]}"#)
                .unwrap();
        assert_eq!(command.resource, BulkResource::Anime);
        assert_eq!(command.items.len(), 2);
    }

    #[test]
    fn test_invalid_formats() {
        for body in [
            &br#"{"items":[]}"#[..],
            br#"{"operation":"create"}"#,
            br#"{"operation":"create","items":{}}"#,
            br#"{"operation":"","items":[]}"#,
            b"not json",
        ] {
            let err = BulkCreateCommand::from_request("anime", body).unwrap_err();
            assert_eq!(err.client_message(), "Invalid request format");
        }
    }

    #[test]
    fn test_unsupported_operation_or_resource() {
        let err =
            BulkCreateCommand::from_request("anime", br#"{"operation":"delete","items":[]}"#)
                .unwrap_err();
        assert_eq!(err.client_message(), "Unsupported bulk operation");

        let err =
            BulkCreateCommand::from_request("studios", br#"{"operation":"create","items":[]}"#)
                .unwrap_err();
        assert_eq!(err.client_message(), "Unsupported bulk operation");
    }
}
