mod common;

use common::release_date;
use episode_service::domain::entities::NewEpisode;
use episode_service::domain::repositories::{EpisodeRepository, FieldConflict, StoreError};
use episode_service::infrastructure::persistence::PgEpisodeRepository;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

fn new_episode(anime_id: Uuid, order: i32, day_offset: i64) -> NewEpisode {
    NewEpisode {
        title: Some(format!("Episode {order}")),
        order_to_watch: order,
        release_date: release_date(2020, day_offset),
        anime_id,
    }
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_create_episode(pool: PgPool) {
    let repo = PgEpisodeRepository::new(Arc::new(pool));
    let anime_id = Uuid::new_v4();

    let episode = repo.create(new_episode(anime_id, 1, 3)).await.unwrap();

    assert!(episode.id > 0);
    assert_eq!(episode.title.as_deref(), Some("Episode 1"));
    assert_eq!(episode.order_to_watch, 1);
    assert_eq!(episode.release_date, release_date(2020, 3));
    assert_eq!(episode.anime_id, anime_id);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_create_blank_title_is_stored_as_null(pool: PgPool) {
    let repo = PgEpisodeRepository::new(Arc::new(pool.clone()));
    let mut episode = new_episode(Uuid::new_v4(), 1, 0);
    episode.title = Some("  ".to_string());

    let created = repo.create(episode).await.unwrap();

    let title: Option<String> = sqlx::query_scalar("SELECT title FROM episodes WHERE id = $1")
        .bind(created.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(created.title.is_none());
    assert!(title.is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_create_duplicate_order(pool: PgPool) {
    let repo = PgEpisodeRepository::new(Arc::new(pool));
    let anime_id = Uuid::new_v4();

    repo.create(new_episode(anime_id, 2, 0)).await.unwrap();
    let err = repo.create(new_episode(anime_id, 2, 5)).await.unwrap_err();

    match err {
        StoreError::ConstraintViolation { conflicts } => assert_eq!(
            conflicts,
            vec![
                FieldConflict::new("animeId", anime_id.to_string()),
                FieldConflict::new("orderToWatch", "2"),
            ]
        ),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_concurrent_duplicate_creates(pool: PgPool) {
    let repo = Arc::new(PgEpisodeRepository::new(Arc::new(pool)));
    let anime_id = Uuid::new_v4();

    let (first, second) = tokio::join!(
        repo.create(new_episode(anime_id, 7, 0)),
        repo.create(new_episode(anime_id, 7, 0))
    );

    let successes = [first.is_ok(), second.is_ok()]
        .into_iter()
        .filter(|ok| *ok)
        .count();
    assert_eq!(successes, 1);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_create_negative_order_is_schema_violation(pool: PgPool) {
    let repo = PgEpisodeRepository::new(Arc::new(pool));

    let err = repo
        .create(new_episode(Uuid::new_v4(), -1, 0))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::SchemaViolation(_)));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_list_by_anime_ordering_and_pagination(pool: PgPool) {
    let repo = PgEpisodeRepository::new(Arc::new(pool));
    let anime_id = Uuid::new_v4();
    let other_anime = Uuid::new_v4();

    for order in 1..=6 {
        repo.create(new_episode(anime_id, order, i64::from(order)))
            .await
            .unwrap();
    }
    repo.create(new_episode(other_anime, 1, 100)).await.unwrap();

    let page = repo.list_by_anime(anime_id, 0, 2).await.unwrap();
    let orders: Vec<i32> = page.iter().map(|e| e.order_to_watch).collect();
    assert_eq!(orders, vec![6, 5]);

    let page = repo.list_by_anime(anime_id, 4, 10).await.unwrap();
    let orders: Vec<i32> = page.iter().map(|e| e.order_to_watch).collect();
    assert_eq!(orders, vec![2, 1]);

    assert!(repo.list_by_anime(Uuid::new_v4(), 0, 10).await.unwrap().is_empty());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_count_by_anime(pool: PgPool) {
    let repo = PgEpisodeRepository::new(Arc::new(pool));
    let busy = Uuid::new_v4();
    let empty = Uuid::new_v4();

    for order in 0..5 {
        repo.create(new_episode(busy, order, 0)).await.unwrap();
    }

    let counts = repo.count_by_anime(&[busy, empty]).await.unwrap();

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[&busy], 5);
    assert_eq!(counts[&empty], 0);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_health_check(pool: PgPool) {
    let repo = PgEpisodeRepository::new(Arc::new(pool));

    assert!(repo.health_check().await);
}
