//! Episode repository implementations.
//!
//! - [`PgEpisodeRepository`] - PostgreSQL storage used in production
//! - [`InMemoryEpisodeRepository`] - process-local storage with the same rules

pub mod memory_episode_repository;
pub mod pg_episode_repository;

pub use memory_episode_repository::InMemoryEpisodeRepository;
pub use pg_episode_repository::PgEpisodeRepository;
