//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod episode_repository;

pub use episode_repository::{EpisodeRepository, FieldConflict, StoreError};

#[cfg(test)]
pub use episode_repository::MockEpisodeRepository;
