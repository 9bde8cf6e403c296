//! API route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    count_episodes_handler, create_episode_handler, health_handler, list_episodes_handler,
};
use crate::state::AppState;

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /health`          - Service and store health
/// - `POST /episode`         - Create an episode
/// - `GET  /episode`         - List episodes of an anime (paginated)
/// - `POST /episode/_counts` - Episode counts for several anime
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/episode",
            get(list_episodes_handler).post(create_episode_handler),
        )
        .route("/episode/_counts", post(count_episodes_handler))
}
