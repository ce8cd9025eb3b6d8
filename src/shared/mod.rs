// Shared kernel used by every module

pub mod application; // Shared application layer patterns
pub mod config; // Environment configuration
pub mod errors; // Shared error types
pub mod http; // Response helpers, auth and rate limiting middleware
pub mod infrastructure; // Shared infrastructure (database)
pub mod utils; // Shared utilities

// Re-exports for convenience
pub use config::{AppConfig, CacheTtl};
pub use infrastructure::database::Database;
