mod command;
mod handler;
mod result;

pub use command::{BulkCreateCommand, BulkResource};
pub use handler::BulkCreateHandler;
pub use result::{BulkCreateResult, BulkItemFailure, BulkItemSuccess, BulkSummary};
