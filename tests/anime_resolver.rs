use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing::get};
use episode_service::domain::AnimeResolver;
use episode_service::domain::entities::Anime;
use episode_service::infrastructure::integration::{HttpAnimeResolver, ResolveError};
use std::time::Duration;
use uuid::{Uuid, uuid};

const COWBOY_BEBOP: Uuid = uuid!("6ec0bd7f-11c0-43da-975e-2a8ad9ebae0b");
const TIMEOUT: Duration = Duration::from_millis(200);

/// Serves `router` on an ephemeral port and returns the catalog base URL.
async fn spawn_catalog(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}/anime")
}

async fn found(Path(id): Path<Uuid>) -> Json<Anime> {
    Json(Anime::new(id, "Naruto", 8.0, 2002, "Masashi Kishimoto"))
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn server_error() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn malformed() -> impl IntoResponse {
    "not json"
}

async fn slow(Path(id): Path<Uuid>) -> Json<Anime> {
    tokio::time::sleep(TIMEOUT * 5).await;
    Json(Anime::new(id, "Too Late", 1.0, 2000, "Nobody"))
}

async fn resolver_for(handler: Router) -> HttpAnimeResolver {
    let base_url = spawn_catalog(handler).await;
    HttpAnimeResolver::new(base_url, TIMEOUT).unwrap()
}

#[tokio::test]
async fn test_resolves_from_catalog() {
    let resolver = resolver_for(Router::new().route("/anime/{id}", get(found))).await;
    let anime_id = Uuid::new_v4();

    let anime = resolver.resolve(anime_id).await.unwrap();

    assert_eq!(anime.id, anime_id);
    assert_eq!(anime.title, "Naruto");
    assert_eq!(anime.release_year, 2002);
}

#[tokio::test]
async fn test_catalog_data_wins_over_fallback() {
    let resolver = resolver_for(Router::new().route("/anime/{id}", get(found))).await;

    let anime = resolver.resolve(COWBOY_BEBOP).await.unwrap();

    assert_eq!(anime.title, "Naruto");
}

#[tokio::test]
async fn test_not_found_skips_fallback() {
    let resolver = resolver_for(Router::new().route("/anime/{id}", get(not_found))).await;

    assert!(resolver.resolve(COWBOY_BEBOP).await.is_none());
    assert!(resolver.resolve(Uuid::new_v4()).await.is_none());
}

#[tokio::test]
async fn test_server_error_uses_fallback() {
    let resolver = resolver_for(Router::new().route("/anime/{id}", get(server_error))).await;

    let anime = resolver.resolve(COWBOY_BEBOP).await.unwrap();
    assert_eq!(anime.title, "Cowboy Bebop");
    assert_eq!(anime.release_year, 1998);

    assert!(resolver.resolve(Uuid::new_v4()).await.is_none());
}

#[tokio::test]
async fn test_server_error_is_reported_by_fetch() {
    let resolver = resolver_for(Router::new().route("/anime/{id}", get(server_error))).await;

    let err = resolver.fetch(COWBOY_BEBOP).await.unwrap_err();

    assert!(matches!(
        err,
        ResolveError::Status(status) if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
    ));
}

#[tokio::test]
async fn test_malformed_body_uses_fallback() {
    let resolver = resolver_for(Router::new().route("/anime/{id}", get(malformed))).await;

    let anime = resolver.resolve(COWBOY_BEBOP).await.unwrap();

    assert_eq!(anime.title, "Cowboy Bebop");
}

#[tokio::test]
async fn test_timeout_uses_fallback() {
    let resolver = resolver_for(Router::new().route("/anime/{id}", get(slow))).await;

    let anime = resolver.resolve(COWBOY_BEBOP).await.unwrap();
    assert_eq!(anime.title, "Cowboy Bebop");

    assert!(resolver.resolve(Uuid::new_v4()).await.is_none());
}

#[tokio::test]
async fn test_unreachable_catalog_uses_fallback() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let resolver = HttpAnimeResolver::new(format!("http://{addr}/anime"), TIMEOUT).unwrap();

    let anime = resolver.resolve(COWBOY_BEBOP).await.unwrap();
    assert_eq!(anime.title, "Cowboy Bebop");
}
