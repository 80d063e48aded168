mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use shortlink::domain::repositories::UrlRepository;

#[tokio::test]
async fn test_shorten_success() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/api/v1/urls")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    let code = body["short_code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert_eq!(body["original_url"], "https://example.com");
    assert_eq!(body["short_url"], format!("{}/{}", common::BASE_URL, code));
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_shorten_keeps_url_verbatim() {
    let (server, _repo) = common::create_test_server();
    let url = "https://example.com/path?q=Rust&x=1#frag";

    let response = server.post("/api/v1/urls").json(&json!({ "url": url })).await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["original_url"], url);
}

#[tokio::test]
async fn test_shorten_deduplicates_by_default() {
    let (server, repo) = common::create_test_server();

    let first = server
        .post("/api/v1/urls")
        .json(&json!({ "url": "https://example.com/dup" }))
        .await;
    first.assert_status(StatusCode::CREATED);

    let second = server
        .post("/api/v1/urls")
        .json(&json!({ "url": "https://example.com/dup" }))
        .await;
    second.assert_status(StatusCode::OK);

    let first: Value = first.json();
    let second: Value = second.json();
    assert_eq!(first["short_code"], second["short_code"]);

    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_always_new_policy() {
    let server = common::create_server_with(common::always_new_settings());

    let first: Value = server
        .post("/api/v1/urls")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json();

    let response = server
        .post("/api/v1/urls")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let second: Value = response.json();
    assert_ne!(first["short_code"], second["short_code"]);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/api/v1/urls")
        .json(&json!({ "url": "not-a-valid-url" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_rejects_non_http_scheme() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/api/v1/urls")
        .json(&json!({ "url": "ftp://example.com/file" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Invalid URL");
}

#[tokio::test]
async fn test_shorten_rejects_empty_url() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/api/v1/urls")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shorten_rejects_too_long_url() {
    let (server, _repo) = common::create_test_server();
    let url = format!("https://example.com/{}", "a".repeat(2100));

    let response = server.post("/api/v1/urls").json(&json!({ "url": url })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shorten_rejects_control_characters() {
    let (server, repo) = common::create_test_server();

    for url in ["https://example.com/a\nb", "https://example.com/a\r\nb", "https://exa\tmple.com"] {
        let response = server.post("/api/v1/urls").json(&json!({ "url": url })).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "validation_error");
    }

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_shorten_same_url_keeps_one_record() {
    let (state, repo) = common::create_test_state();

    let mut handles = Vec::new();
    for _ in 0..16 {
        let service = state.url_service.clone();
        handles.push(tokio::spawn(async move {
            service.shorten("https://example.com/race").await.unwrap()
        }));
    }

    let mut codes = Vec::new();
    for handle in handles {
        codes.push(handle.await.unwrap().record.short_code);
    }

    codes.dedup();
    assert_eq!(codes.len(), 1);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_missing_field() {
    let (server, _repo) = common::create_test_server();

    let response = server.post("/api/v1/urls").json(&json!({})).await;

    assert!(response.status_code().is_client_error());
}
