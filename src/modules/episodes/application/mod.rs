pub mod ports;
pub mod service;

pub use ports::EpisodeRepository;
pub use service::EpisodeService;
