pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

pub use application::{CacheGate, SearchCache, SearchCatalogHandler, SearchRequest, SearchStore};
pub use infrastructure::{DieselSearchStore, MemorySearchCache, RedisSearchCache};
