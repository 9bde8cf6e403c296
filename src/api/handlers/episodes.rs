//! Handlers for episode endpoints.

use std::collections::HashMap;

use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

use crate::api::dto::episode::{CountEpisodesRequest, CreateEpisodeRequest, ListEpisodesQuery};
use crate::api::extract::{QueryParams, ValidatedJson};
use crate::domain::entities::EpisodeInfo;
use crate::error::AppError;
use crate::state::AppState;

/// Creates an episode.
///
/// # Endpoint
///
/// `POST /api/episode`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Pilot",
///   "orderToWatch": 1,
///   "releaseDate": "2009-04-05T00:00:00.000Z",
///   "animeId": "550e8400-e29b-41d4-a716-446655440000"
/// }
/// ```
///
/// # Response Codes
///
/// - **201 Created**: Episode stored, body is the stored episode
/// - **400 Bad Request**: Malformed body, failed rule, unknown anime or release
///   date out of range
/// - **409 Conflict**: Watch order already taken for this anime
pub async fn create_episode_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEpisodeRequest>,
) -> Result<(StatusCode, Json<EpisodeInfo>), AppError> {
    let new_episode = payload.into_new_episode()?;

    let episode = state.episode_service.create(new_episode).await?;

    Ok((StatusCode::CREATED, Json(episode)))
}

/// Lists episodes of one anime, newest release first.
///
/// # Endpoint
///
/// `GET /api/episode?animeId={uuid}&from={offset}&size={limit}`
///
/// # Query Parameters
///
/// - `animeId` (required): Anime id, a version 4 UUID
/// - `from` (optional): Offset (default: 0)
/// - `size` (optional): Page size (default: 10, max: 100)
pub async fn list_episodes_handler(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListEpisodesQuery>,
) -> Result<Json<Vec<EpisodeInfo>>, AppError> {
    let query = params.into_list_query()?;

    let episodes = state.episode_service.list_in_anime(query).await?;

    Ok(Json(episodes))
}

/// Counts episodes for several anime.
///
/// # Endpoint
///
/// `POST /api/episode/_counts`
///
/// # Request Body
///
/// ```json
/// { "animeIds": ["550e8400-e29b-41d4-a716-446655440000"] }
/// ```
///
/// # Response
///
/// Object keyed by anime id; repeated ids appear once.
///
/// ```json
/// { "550e8400-e29b-41d4-a716-446655440000": 12 }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the list is empty, too long, holds a non-UUID
/// value or names any anime that does not exist. Nothing is counted in that
/// case.
pub async fn count_episodes_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CountEpisodesRequest>,
) -> Result<Json<HashMap<Uuid, i64>>, AppError> {
    let anime_ids = payload.into_anime_ids(state.max_id_list_size)?;

    let counts = state.episode_service.count_for_many(&anime_ids).await?;

    Ok(Json(counts))
}
