use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BulkItemSuccess {
    pub id: i32,
    pub success: bool,
}

/// A rejected item, echoed back with the reason
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BulkItemFailure {
    pub item: Value,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BulkSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

/// Outcome of a bulk create; partial success is normal
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BulkCreateResult {
    pub operation: &'static str,
    pub resource: &'static str,
    pub results: Vec<BulkItemSuccess>,
    pub errors: Vec<BulkItemFailure>,
    pub summary: BulkSummary,
}

impl BulkCreateResult {
    pub fn new(
        resource: &'static str,
        results: Vec<BulkItemSuccess>,
        errors: Vec<BulkItemFailure>,
    ) -> Self {
        let summary = BulkSummary {
            total: results.len() + errors.len(),
            successful: results.len(),
            failed: errors.len(),
        };
        Self {
            operation: "bulk_create",
            resource,
            results,
            errors,
            summary,
        }
    }
}
