pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

pub use application::{EpisodeRepository, EpisodeService};
pub use domain::{Episode, EpisodeChanges, EpisodeDraft, NewEpisode};
pub use infrastructure::EpisodeRepositoryImpl;
