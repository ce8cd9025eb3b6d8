pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{AnimeRepository, AnimeService};
pub use domain::{Anime, AnimeChanges, AnimeDraft, NewAnime};
pub use infrastructure::AnimeRepositoryImpl;
