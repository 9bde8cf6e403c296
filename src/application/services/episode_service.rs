//! Episode creation, listing and counting workflow.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use futures::future::join_all;
use uuid::Uuid;

use crate::application::services::episode_validator::EpisodeValidator;
use crate::domain::entities::{EpisodeInfo, EpisodeListQuery, NewEpisode};
use crate::domain::repositories::{EpisodeRepository, FieldConflict, StoreError};
use crate::error::AppError;

pub fn duplicate_field_message(conflict: &FieldConflict) -> String {
    format!(
        "Duplicate value for field: {} ({})",
        conflict.field, conflict.value
    )
}

/// Service orchestrating episode validation and persistence.
///
/// Business failures surface as [`AppError::Validation`] or
/// [`AppError::Duplicate`]; everything else is [`AppError::Internal`].
pub struct EpisodeService {
    repository: Arc<dyn EpisodeRepository>,
    validator: EpisodeValidator,
}

impl EpisodeService {
    /// Creates a new episode service.
    pub fn new(repository: Arc<dyn EpisodeRepository>, validator: EpisodeValidator) -> Self {
        Self {
            repository,
            validator,
        }
    }

    /// Validates and stores a new episode.
    ///
    /// Uniqueness of `(anime_id, order_to_watch)` is left to the store; a
    /// collision is reported as a duplicate rather than checked up front.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the anime does not exist or the release
    /// date is out of range.
    /// Returns [`AppError::Duplicate`] with one message per conflicting field if the
    /// watch order is already taken for this anime.
    /// Returns [`AppError::Internal`] on any other store failure.
    pub async fn create(&self, new_episode: NewEpisode) -> Result<EpisodeInfo, AppError> {
        self.validator.validate_for_create(&new_episode).await?;

        match self.repository.create(new_episode).await {
            Ok(episode) => {
                tracing::info!(
                    episode_id = episode.id,
                    anime_id = %episode.anime_id,
                    order_to_watch = episode.order_to_watch,
                    "Episode created"
                );
                Ok(EpisodeInfo::from(episode))
            }
            Err(StoreError::ConstraintViolation { conflicts }) => Err(AppError::duplicate(
                conflicts.iter().map(duplicate_field_message),
            )),
            Err(err) => Err(err.into()),
        }
    }

    /// Lists episodes of an existing anime, newest release first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the anime does not exist.
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn list_in_anime(&self, query: EpisodeListQuery) -> Result<Vec<EpisodeInfo>, AppError> {
        self.validator.resolve_existing(query.anime_id).await?;

        let episodes = self
            .repository
            .list_by_anime(query.anime_id, query.from, query.size)
            .await?;

        Ok(episodes.into_iter().map(EpisodeInfo::from).collect())
    }

    /// Counts episodes for several anime at once.
    ///
    /// Ids are de-duplicated first, then every unique id is resolved
    /// concurrently. The batch is all-or-nothing: one unknown id rejects it and
    /// no count query is issued.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every unknown anime, in the order
    /// the ids first appear in `anime_ids`.
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn count_for_many(&self, anime_ids: &[Uuid]) -> Result<HashMap<Uuid, i64>, AppError> {
        let unique_ids = unique_in_order(anime_ids);

        let checks = unique_ids
            .iter()
            .map(|anime_id| self.validator.resolve_existing(*anime_id));

        let mut not_found = Vec::new();
        for result in join_all(checks).await {
            match result {
                Ok(_) => {}
                Err(AppError::Validation { errors }) => not_found.extend(errors),
                Err(other) => return Err(other),
            }
        }

        if !not_found.is_empty() {
            return Err(AppError::Validation { errors: not_found });
        }

        Ok(self.repository.count_by_anime(&unique_ids).await?)
    }

    /// Returns `true` when the episode store is reachable.
    pub async fn storage_ready(&self) -> bool {
        self.repository.health_check().await
    }
}

/// Removes repeated ids, keeping the first occurrence of each.
fn unique_in_order(ids: &[Uuid]) -> Vec<Uuid> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
