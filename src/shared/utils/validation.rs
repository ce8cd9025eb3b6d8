use serde_json::Value;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    /// A required text field must be present and non-empty
    pub fn has_text(value: Option<&str>) -> bool {
        value.is_some_and(|v| !v.is_empty())
    }

    /// A required numeric field must be present and non-zero
    pub fn has_number(value: Option<i32>) -> bool {
        value.is_some_and(|v| v != 0)
    }

    /// Loose presence test for untyped JSON values: null, false, 0 and ""
    /// count as absent
    pub fn is_truthy(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    pub fn require(present: bool) -> Result<(), AppError> {
        if present {
            Ok(())
        } else {
            Err(AppError::ValidationError(
                "Missing required fields".to_string(),
            ))
        }
    }

    /// Path identifiers are positive integers
    pub fn parse_id(raw: &str, entity: &str) -> Result<i32, AppError> {
        raw.parse::<i32>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| AppError::NotFound(format!("{} not found", entity)))
    }
}
