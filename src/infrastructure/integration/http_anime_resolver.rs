//! Anime catalog client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use uuid::Uuid;

use super::fallback_anime::fallback_anime;
use crate::domain::AnimeResolver;
use crate::domain::entities::Anime;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("anime catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("anime catalog responded with {0}")]
    Status(StatusCode),
}

/// Resolves anime through `GET {base_url}/{anime_id}`.
///
/// A 404 is authoritative and yields `None`. Every other failure (timeout,
/// connection error, non-success status, malformed body) is logged and answered
/// from the fallback table. Nothing is cached.
pub struct HttpAnimeResolver {
    client: Client,
    base_url: String,
}

impl HttpAnimeResolver {
    /// Creates a resolver for the catalog at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Transport`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ResolveError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// Performs the remote lookup without any fallback.
    pub async fn fetch(&self, anime_id: Uuid) -> Result<Option<Anime>, ResolveError> {
        let url = format!("{}/{}", self.base_url, anime_id);
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(ResolveError::Status(response.status()));
        }

        Ok(Some(response.json::<Anime>().await?))
    }
}

#[async_trait]
impl AnimeResolver for HttpAnimeResolver {
    async fn resolve(&self, anime_id: Uuid) -> Option<Anime> {
        match self.fetch(anime_id).await {
            Ok(Some(anime)) => {
                debug!(%anime_id, title = %anime.title, "Anime resolved from catalog");
                Some(anime)
            }
            Ok(None) => {
                debug!(%anime_id, "Anime not found in catalog");
                None
            }
            Err(e) => {
                warn!(%anime_id, error = %e, "Anime catalog unavailable, using fallback data");
                fallback_anime(anime_id)
            }
        }
    }
}
