mod handler;
mod query;
mod result;

pub use handler::SearchCatalogHandler;
pub use query::SearchRequest;
pub use result::{CacheStatus, SearchOutcome, SearchResponse, SearchResults};
