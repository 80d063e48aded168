#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use shortlink::application::services::ShortenerSettings;
use shortlink::domain::entities::{NewUrlRecord, UrlRecord};
use shortlink::domain::repositories::UrlRepository;
use shortlink::domain::{ClickCounting, ShortenPolicy, StoreError};
use shortlink::infrastructure::persistence::MemoryUrlRepository;
use shortlink::routes::{app_router, router};
use shortlink::state::AppState;
use std::sync::Arc;
use std::time::Duration;

pub const BASE_URL: &str = "https://s.example.com";

pub fn test_settings() -> ShortenerSettings {
    ShortenerSettings {
        base_url: BASE_URL.to_string(),
        ..ShortenerSettings::default()
    }
}

pub fn create_test_state() -> (AppState, Arc<MemoryUrlRepository>) {
    create_test_state_with(test_settings())
}

pub fn create_test_state_with(settings: ShortenerSettings) -> (AppState, Arc<MemoryUrlRepository>) {
    let repository = Arc::new(MemoryUrlRepository::new());
    let state = AppState::new(repository.clone(), settings);
    (state, repository)
}

pub fn create_test_server() -> (TestServer, Arc<MemoryUrlRepository>) {
    let (state, repository) = create_test_state();
    (TestServer::new(router(state)).unwrap(), repository)
}

pub fn create_server_with(settings: ShortenerSettings) -> TestServer {
    let (state, _) = create_test_state_with(settings);
    TestServer::new(router(state)).unwrap()
}

pub fn always_new_settings() -> ShortenerSettings {
    ShortenerSettings {
        policy: ShortenPolicy::AlwaysNew,
        ..test_settings()
    }
}

pub async fn create_test_link(repo: &MemoryUrlRepository, code: &str, url: &str) -> UrlRecord {
    repo.create(NewUrlRecord::new(url, code)).await.unwrap()
}

/// Wraps the in-memory store and fails selected operations.
pub struct FlakyRepository {
    pub inner: MemoryUrlRepository,
    pub fail_increments: bool,
    pub fail_ping: bool,
    /// Added to every read before it reaches the inner store.
    pub delay: Option<Duration>,
}

impl FlakyRepository {
    pub fn failing_increments() -> Self {
        Self {
            inner: MemoryUrlRepository::new(),
            fail_increments: true,
            fail_ping: false,
            delay: None,
        }
    }

    pub fn failing_ping() -> Self {
        Self {
            inner: MemoryUrlRepository::new(),
            fail_increments: false,
            fail_ping: true,
            delay: None,
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            inner: MemoryUrlRepository::new(),
            fail_increments: false,
            fail_ping: false,
            delay: Some(delay),
        }
    }

    async fn wait(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl UrlRepository for FlakyRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, StoreError> {
        self.inner.create(new_record).await
    }

    async fn get_by_code(&self, code: &str) -> Result<UrlRecord, StoreError> {
        self.wait().await;
        self.inner.get_by_code(code).await
    }

    async fn get_by_original_url(&self, url: &str) -> Result<Option<UrlRecord>, StoreError> {
        self.wait().await;
        self.inner.get_by_original_url(url).await
    }

    async fn increment_clicks(&self, id: i64) -> Result<i64, StoreError> {
        if self.fail_increments {
            return Err(StoreError::Backend("connection reset".to_string()));
        }
        self.inner.increment_clicks(id).await
    }

    async fn exists(&self, code: &str) -> Result<bool, StoreError> {
        self.inner.exists(code).await
    }

    async fn delete(&self, code: &str) -> Result<bool, StoreError> {
        self.inner.delete(code).await
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<UrlRecord>, StoreError> {
        self.wait().await;
        self.inner.list(limit, offset).await
    }

    async fn count(&self) -> Result<i64, StoreError> {
        self.wait().await;
        self.inner.count().await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        if self.fail_ping {
            return Err(StoreError::Backend("connection refused".to_string()));
        }
        self.wait().await;
        self.inner.ping().await
    }
}

pub fn flaky_server(
    repository: FlakyRepository,
    click_counting: ClickCounting,
) -> (TestServer, Arc<FlakyRepository>) {
    let repository = Arc::new(repository);
    let settings = ShortenerSettings {
        click_counting,
        ..test_settings()
    };
    let state = AppState::new(repository.clone(), settings);
    (TestServer::new(router(state)).unwrap(), repository)
}

/// Serves the production stack from [`app_router`]: timeout and trailing-slash
/// normalization included.
pub fn create_app_server(
    repository: Arc<dyn UrlRepository>,
    request_timeout: Duration,
) -> TestServer {
    let state = AppState::new(repository, test_settings());
    let app = axum::Router::new().fallback_service(app_router(state, request_timeout));
    TestServer::new(app).unwrap()
}
