//! PostgreSQL implementation of the episode repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Episode, NewEpisode};
use crate::domain::repositories::{EpisodeRepository, FieldConflict, StoreError};
use crate::utils::db_error::classify_write_error;

#[derive(sqlx::FromRow)]
struct EpisodeRow {
    id: i64,
    title: Option<String>,
    order_to_watch: i32,
    release_date: DateTime<Utc>,
    anime_id: Uuid,
}

impl From<EpisodeRow> for Episode {
    fn from(row: EpisodeRow) -> Self {
        Episode::new(
            row.id,
            row.title,
            row.order_to_watch,
            row.release_date,
            row.anime_id,
        )
    }
}

#[derive(sqlx::FromRow)]
struct AnimeCountRow {
    anime_id: Uuid,
    count: i64,
}

/// PostgreSQL repository for episode storage.
///
/// The `episodes_anime_order_key` unique constraint guards `(anime_id,
/// order_to_watch)`; concurrent inserts of the same pair are serialised by the
/// database and exactly one succeeds.
pub struct PgEpisodeRepository {
    pool: Arc<PgPool>,
}

impl PgEpisodeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EpisodeRepository for PgEpisodeRepository {
    async fn create(&self, new_episode: NewEpisode) -> Result<Episode, StoreError> {
        let row = sqlx::query_as::<_, EpisodeRow>(
            r#"
            INSERT INTO episodes (title, order_to_watch, release_date, anime_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, order_to_watch, release_date, anime_id
            "#,
        )
        .bind(new_episode.normalized_title())
        .bind(new_episode.order_to_watch)
        .bind(new_episode.release_date)
        .bind(new_episode.anime_id)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            classify_write_error(e, || {
                vec![
                    FieldConflict::new("animeId", new_episode.anime_id.to_string()),
                    FieldConflict::new("orderToWatch", new_episode.order_to_watch.to_string()),
                ]
            })
        })?;

        Ok(row.into())
    }

    async fn list_by_anime(
        &self,
        anime_id: Uuid,
        from: i64,
        size: i64,
    ) -> Result<Vec<Episode>, StoreError> {
        let rows = sqlx::query_as::<_, EpisodeRow>(
            r#"
            SELECT id, title, order_to_watch, release_date, anime_id
            FROM episodes
            WHERE anime_id = $1
            ORDER BY release_date DESC, order_to_watch DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(anime_id)
        .bind(size)
        .bind(from)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Episode::from).collect())
    }

    async fn count_by_anime(&self, anime_ids: &[Uuid]) -> Result<HashMap<Uuid, i64>, StoreError> {
        let rows = sqlx::query_as::<_, AnimeCountRow>(
            r#"
            SELECT anime_id, COUNT(*) AS count
            FROM episodes
            WHERE anime_id = ANY($1)
            GROUP BY anime_id
            "#,
        )
        .bind(anime_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut counts: HashMap<Uuid, i64> = anime_ids.iter().map(|id| (*id, 0)).collect();
        for row in rows {
            counts.insert(row.anime_id, row.count);
        }

        Ok(counts)
    }

    async fn health_check(&self) -> bool {
        match sqlx::query("SELECT 1").execute(self.pool.as_ref()).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Episode store health check failed");
                false
            }
        }
    }
}
