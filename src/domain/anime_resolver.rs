//! Anime lookup contract.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Anime;

/// Resolves anime identifiers to catalog metadata.
///
/// Resolution never fails: implementations absorb transport errors (falling
/// back to whatever local data they have) and return `None` only when the
/// anime is unknown.
///
/// # Implementations
///
/// - [`crate::infrastructure::integration::HttpAnimeResolver`] - remote catalog with static fallback
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnimeResolver: Send + Sync {
    async fn resolve(&self, anime_id: Uuid) -> Option<Anime>;
}
