pub mod cache_gate;
pub mod ports;
pub mod search_catalog;

pub use cache_gate::CacheGate;
pub use ports::{SearchCache, SearchStore};
pub use search_catalog::{
    CacheStatus, SearchCatalogHandler, SearchOutcome, SearchRequest, SearchResponse, SearchResults,
};
