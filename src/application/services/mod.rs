//! Business logic services for the application layer.

pub mod episode_service;
pub mod episode_validator;

pub use episode_service::EpisodeService;
pub use episode_validator::EpisodeValidator;
