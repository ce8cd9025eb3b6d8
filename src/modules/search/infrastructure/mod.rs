pub mod diesel_search_store;
pub mod memory_cache;
pub mod redis_cache;

pub use diesel_search_store::DieselSearchStore;
pub use memory_cache::MemorySearchCache;
pub use redis_cache::RedisSearchCache;
