//! PostgreSQL repository tests.
//!
//! Run with `DATABASE_URL` pointing at a scratch server:
//! `cargo test --test repository_url -- --ignored`

use chrono::{Duration, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use shortlink::domain::StoreError;
use shortlink::domain::entities::NewUrlRecord;
use shortlink::domain::repositories::UrlRepository;
use shortlink::infrastructure::persistence::PgUrlRepository;

fn repo(pool: PgPool) -> PgUrlRepository {
    PgUrlRepository::new(Arc::new(pool))
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_and_get(pool: PgPool) {
    let repo = repo(pool);

    let created = repo
        .create(NewUrlRecord::new("https://example.com", "abc123"))
        .await
        .unwrap();

    assert_eq!(created.short_code, "abc123");
    assert_eq!(created.original_url, "https://example.com");
    assert_eq!(created.click_count, 0);

    let found = repo.get_by_code("abc123").await.unwrap();
    assert_eq!(found, created);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_duplicate_code(pool: PgPool) {
    let repo = repo(pool);
    repo.create(NewUrlRecord::new("https://a.example.com", "dup001"))
        .await
        .unwrap();

    let result = repo
        .create(NewUrlRecord::new("https://b.example.com", "dup001"))
        .await;

    assert_eq!(result, Err(StoreError::DuplicateCode("dup001".to_string())));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_get_missing_code(pool: PgPool) {
    let repo = repo(pool);

    assert_eq!(repo.get_by_code("nope00").await, Err(StoreError::NotFound));
    assert!(!repo.exists("nope00").await.unwrap());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_get_by_original_url_returns_oldest(pool: PgPool) {
    let repo = repo(pool);
    let mut older = NewUrlRecord::new("https://example.com", "old001");
    older.created_at = Some(Utc::now() - Duration::hours(1));
    repo.create(older).await.unwrap();
    repo.create(NewUrlRecord::new("https://example.com", "new001"))
        .await
        .unwrap();

    let found = repo
        .get_by_original_url("https://example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.short_code, "old001");

    assert!(
        repo.get_by_original_url("https://other.example.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_increment_clicks(pool: PgPool) {
    let repo = repo(pool);
    let record = repo
        .create(NewUrlRecord::new("https://example.com", "click1"))
        .await
        .unwrap();

    assert_eq!(repo.increment_clicks(record.id).await.unwrap(), 1);
    assert_eq!(repo.increment_clicks(record.id).await.unwrap(), 2);
    assert_eq!(repo.get_by_code("click1").await.unwrap().click_count, 2);

    assert_eq!(repo.increment_clicks(999_999).await, Err(StoreError::NotFound));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_concurrent_increments_are_not_lost(pool: PgPool) {
    let repo = Arc::new(repo(pool));
    let record = repo
        .create(NewUrlRecord::new("https://example.com", "race01"))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..50 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.increment_clicks(record.id).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(repo.get_by_code("race01").await.unwrap().click_count, 50);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete(pool: PgPool) {
    let repo = repo(pool);
    repo.create(NewUrlRecord::new("https://example.com", "del001"))
        .await
        .unwrap();

    assert!(repo.delete("del001").await.unwrap());
    assert!(!repo.delete("del001").await.unwrap());
    assert!(!repo.exists("del001").await.unwrap());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list_and_count(pool: PgPool) {
    let repo = repo(pool);
    let now = Utc::now();
    for (i, code) in ["list01", "list02", "list03"].iter().enumerate() {
        let mut record = NewUrlRecord::new(format!("https://example.com/{i}"), *code);
        record.created_at = Some(now + Duration::seconds(i as i64));
        repo.create(record).await.unwrap();
    }

    let page = repo.list(2, 0).await.unwrap();
    let codes: Vec<_> = page.iter().map(|r| r.short_code.as_str()).collect();
    assert_eq!(codes, ["list03", "list02"]);

    let rest = repo.list(2, 2).await.unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].short_code, "list01");

    assert_eq!(repo.count().await.unwrap(), 3);
    assert!(repo.ping().await.is_ok());
}
