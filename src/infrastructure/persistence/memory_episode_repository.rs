//! In-process episode repository.
//!
//! Backs the HTTP tests, which run without PostgreSQL. It enforces
//! the same `(anime_id, order_to_watch)` uniqueness and ordering rules as
//! [`PgEpisodeRepository`](super::PgEpisodeRepository).

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Episode, NewEpisode};
use crate::domain::repositories::{EpisodeRepository, FieldConflict, StoreError};

#[derive(Default)]
struct Inner {
    next_id: i64,
    episodes: Vec<Episode>,
}

#[derive(Default)]
pub struct InMemoryEpisodeRepository {
    inner: RwLock<Inner>,
}

impl InMemoryEpisodeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored episodes across all anime.
    pub async fn len(&self) -> usize {
        self.inner.read().await.episodes.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl EpisodeRepository for InMemoryEpisodeRepository {
    async fn create(&self, new_episode: NewEpisode) -> Result<Episode, StoreError> {
        if new_episode.order_to_watch < 0 {
            return Err(StoreError::SchemaViolation(format!(
                "order_to_watch must be non-negative, got {}",
                new_episode.order_to_watch
            )));
        }

        // Check and insert under one write lock so concurrent creates of the
        // same pair cannot both succeed.
        let mut inner = self.inner.write().await;

        let taken = inner.episodes.iter().any(|episode| {
            episode.anime_id == new_episode.anime_id
                && episode.order_to_watch == new_episode.order_to_watch
        });
        if taken {
            return Err(StoreError::ConstraintViolation {
                conflicts: vec![
                    FieldConflict::new("animeId", new_episode.anime_id.to_string()),
                    FieldConflict::new("orderToWatch", new_episode.order_to_watch.to_string()),
                ],
            });
        }

        inner.next_id += 1;
        let episode = Episode::new(
            inner.next_id,
            new_episode.normalized_title(),
            new_episode.order_to_watch,
            new_episode.release_date,
            new_episode.anime_id,
        );
        inner.episodes.push(episode.clone());

        Ok(episode)
    }

    async fn list_by_anime(
        &self,
        anime_id: Uuid,
        from: i64,
        size: i64,
    ) -> Result<Vec<Episode>, StoreError> {
        let inner = self.inner.read().await;

        let mut episodes: Vec<Episode> = inner
            .episodes
            .iter()
            .filter(|episode| episode.anime_id == anime_id)
            .cloned()
            .collect();
        episodes.sort_by(|a, b| {
            b.release_date
                .cmp(&a.release_date)
                .then(b.order_to_watch.cmp(&a.order_to_watch))
        });

        let skip = usize::try_from(from.max(0)).unwrap_or(usize::MAX);
        let take = usize::try_from(size.max(0)).unwrap_or(usize::MAX);

        Ok(episodes.into_iter().skip(skip).take(take).collect())
    }

    async fn count_by_anime(&self, anime_ids: &[Uuid]) -> Result<HashMap<Uuid, i64>, StoreError> {
        let inner = self.inner.read().await;

        let mut counts: HashMap<Uuid, i64> = anime_ids.iter().map(|id| (*id, 0)).collect();
        for episode in &inner.episodes {
            if let Some(count) = counts.get_mut(&episode.anime_id) {
                *count += 1;
            }
        }

        Ok(counts)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
