//! Shared application state.

use std::sync::Arc;

use crate::application::services::EpisodeService;

/// State injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub episode_service: Arc<EpisodeService>,
    /// Upper bound on ids accepted by the count endpoint.
    pub max_id_list_size: usize,
}

impl AppState {
    pub fn new(episode_service: Arc<EpisodeService>, max_id_list_size: usize) -> Self {
        Self {
            episode_service,
            max_id_list_size,
        }
    }
}
