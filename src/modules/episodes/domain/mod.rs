pub mod episode;

pub use episode::{Episode, EpisodeChanges, EpisodeDraft, NewEpisode};
