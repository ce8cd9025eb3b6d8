pub mod anime;

pub use anime::{Anime, AnimeChanges, AnimeDraft, NewAnime};
