mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use episode_service::infrastructure::persistence::InMemoryEpisodeRepository;
use episode_service::routes::app_router;
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let state = common::create_test_state(
        Arc::new(common::StubAnimeResolver::default()),
        Arc::new(InMemoryEpisodeRepository::new()),
    );
    let app = app_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let state = common::create_test_state(
        Arc::new(common::StubAnimeResolver::default()),
        Arc::new(InMemoryEpisodeRepository::new()),
    );

    let response = app_router(state)
        .oneshot(
            Request::builder()
                .uri("/api/anime")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
