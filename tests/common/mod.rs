#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use chrono::{DateTime, Duration, TimeZone, Utc};
use episode_service::application::services::{EpisodeService, EpisodeValidator};
use episode_service::domain::AnimeResolver;
use episode_service::domain::repositories::EpisodeRepository;
use episode_service::domain::entities::Anime;
use episode_service::infrastructure::persistence::InMemoryEpisodeRepository;
use episode_service::api::routes::api_routes;
use episode_service::state::AppState;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub const MAX_FUTURE_RELEASE_YEARS: u32 = 10;
pub const MAX_ID_LIST_SIZE: usize = 100;

/// Resolver answering from a fixed table and counting lookups per id.
#[derive(Default)]
pub struct StubAnimeResolver {
    anime: HashMap<Uuid, Anime>,
    calls: Mutex<HashMap<Uuid, usize>>,
    total_calls: AtomicUsize,
}

impl StubAnimeResolver {
    pub fn with_anime(anime: impl IntoIterator<Item = Anime>) -> Self {
        Self {
            anime: anime.into_iter().map(|a| (a.id, a)).collect(),
            ..Self::default()
        }
    }

    pub fn calls_for(&self, anime_id: Uuid) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(&anime_id)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.total_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnimeResolver for StubAnimeResolver {
    async fn resolve(&self, anime_id: Uuid) -> Option<Anime> {
        self.total_calls.fetch_add(1, Ordering::SeqCst);
        *self.calls.lock().unwrap().entry(anime_id).or_default() += 1;
        self.anime.get(&anime_id).cloned()
    }
}

pub fn test_anime(release_year: i32) -> Anime {
    Anime::new(Uuid::new_v4(), "Test Anime", 8.0, release_year, "Test Author")
}

pub fn release_date(year: i32, day_offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap() + Duration::days(day_offset)
}

/// Everything a handler test needs: the server plus handles on its collaborators.
pub struct TestApp {
    pub server: TestServer,
    pub resolver: Arc<StubAnimeResolver>,
    pub repository: Arc<InMemoryEpisodeRepository>,
}

pub fn create_test_state(
    resolver: Arc<StubAnimeResolver>,
    repository: Arc<InMemoryEpisodeRepository>,
) -> AppState {
    create_test_state_with(resolver, repository)
}

pub fn create_test_state_with(
    resolver: Arc<dyn AnimeResolver>,
    repository: Arc<dyn EpisodeRepository>,
) -> AppState {
    let validator = EpisodeValidator::new(resolver, MAX_FUTURE_RELEASE_YEARS);
    let service = EpisodeService::new(repository, validator);

    AppState::new(Arc::new(service), MAX_ID_LIST_SIZE)
}

pub fn create_test_app(anime: Vec<Anime>) -> TestApp {
    let resolver = Arc::new(StubAnimeResolver::with_anime(anime));
    let repository = Arc::new(InMemoryEpisodeRepository::new());
    let state = create_test_state(resolver.clone(), repository.clone());

    let app = Router::new().nest("/api", api_routes()).with_state(state);
    let server = TestServer::new(app).unwrap();

    TestApp {
        server,
        resolver,
        repository,
    }
}
