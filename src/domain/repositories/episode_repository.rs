//! Repository trait for episode persistence.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::{Episode, NewEpisode};

/// A single field/value pair that collided with an existing record.
///
/// `field` uses the public (camelCase) field name, e.g. `animeId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConflict {
    pub field: String,
    pub value: String,
}

impl FieldConflict {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Failures reported by an episode store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The `(animeId, orderToWatch)` pair already exists.
    #[error("unique constraint violated ({} conflicting fields)", .conflicts.len())]
    ConstraintViolation { conflicts: Vec<FieldConflict> },

    /// A required field is missing or malformed.
    #[error("schema violation: {0}")]
    SchemaViolation(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Repository interface for storing and querying episodes.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgEpisodeRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryEpisodeRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_episode.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EpisodeRepository: Send + Sync {
    /// Persists a new episode.
    ///
    /// The uniqueness of `(anime_id, order_to_watch)` is enforced atomically by
    /// the store. Callers must not pre-check for duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ConstraintViolation`] if the pair already exists.
    /// Returns [`StoreError::SchemaViolation`] if a required field is missing or
    /// `order_to_watch` is negative.
    /// Returns [`StoreError::Database`] on other database errors.
    async fn create(&self, new_episode: NewEpisode) -> Result<Episode, StoreError>;

    /// Lists episodes of an anime, newest release first.
    ///
    /// Ties on release date are broken by watch order, descending. `from` is the
    /// number of records to skip and `size` the maximum number returned.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors. An anime without
    /// episodes yields an empty list.
    async fn list_by_anime(
        &self,
        anime_id: Uuid,
        from: i64,
        size: i64,
    ) -> Result<Vec<Episode>, StoreError>;

    /// Counts episodes for each of the given anime.
    ///
    /// Every requested id appears in the result, with `0` when it has no
    /// episodes. Repeated ids do not inflate counts.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors.
    async fn count_by_anime(&self, anime_ids: &[Uuid]) -> Result<HashMap<Uuid, i64>, StoreError>;

    /// Returns `true` when the store is reachable.
    async fn health_check(&self) -> bool;
}
