//! Anime metadata owned by the external anime catalog.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Anime metadata as returned by the anime catalog API.
///
/// This service never creates or mutates anime records. They are fetched on
/// demand to validate episodes and discarded afterwards.
///
/// `id` and `releaseYear` must be present in a catalog response; the remaining
/// fields are informational and default when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anime {
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub score: f64,
    pub release_year: i32,
    #[serde(default)]
    pub author: String,
}

impl Anime {
    /// Creates a new Anime instance.
    pub fn new(
        id: Uuid,
        title: impl Into<String>,
        score: f64,
        release_year: i32,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            score,
            release_year,
            author: author.into(),
        }
    }
}
