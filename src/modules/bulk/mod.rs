pub mod application;
pub mod handlers;

pub use application::{BulkCreateCommand, BulkCreateHandler, BulkCreateResult, BulkResource};
