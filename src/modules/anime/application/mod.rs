pub mod ports;
pub mod service;

// Re-export commonly used types
pub use ports::AnimeRepository;
pub use service::AnimeService;
