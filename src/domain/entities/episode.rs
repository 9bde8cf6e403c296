//! Episode entity and its public projection.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A stored episode of an anime.
///
/// `(anime_id, order_to_watch)` is unique across all episodes; the store is the
/// authority for that rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    pub id: i64,
    pub title: Option<String>,
    pub order_to_watch: i32,
    pub release_date: DateTime<Utc>,
    pub anime_id: Uuid,
}

impl Episode {
    /// Creates a new Episode instance.
    pub fn new(
        id: i64,
        title: Option<String>,
        order_to_watch: i32,
        release_date: DateTime<Utc>,
        anime_id: Uuid,
    ) -> Self {
        Self {
            id,
            title,
            order_to_watch,
            release_date,
            anime_id,
        }
    }
}

/// Input data for creating a new episode.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEpisode {
    pub title: Option<String>,
    pub order_to_watch: i32,
    pub release_date: DateTime<Utc>,
    pub anime_id: Uuid,
}

impl NewEpisode {
    /// Returns the title as it must be persisted.
    ///
    /// Surrounding whitespace is removed; a title that is empty after trimming
    /// is treated as absent.
    pub fn normalized_title(&self) -> Option<String> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .map(str::to_owned)
    }
}

/// Pagination query for episodes of a single anime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeListQuery {
    pub anime_id: Uuid,
    pub from: i64,
    pub size: i64,
}

/// Public representation of an episode.
///
/// The store identifier is exposed as an opaque string and the release date is
/// rendered as RFC 3339 with millisecond precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeInfo {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub order_to_watch: i32,
    pub release_date: String,
    pub anime_id: String,
}

impl From<Episode> for EpisodeInfo {
    fn from(episode: Episode) -> Self {
        Self {
            id: episode.id.to_string(),
            title: episode.title,
            order_to_watch: episode.order_to_watch,
            release_date: episode
                .release_date
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            anime_id: episode.anime_id.to_string(),
        }
    }
}
