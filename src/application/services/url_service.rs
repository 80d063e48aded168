//! Shortening, redirect resolution and statistics.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewUrlRecord, UrlRecord, UrlStats};
use crate::domain::errors::StoreError;
use crate::domain::policy::{ClickCounting, ShortenPolicy};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, is_valid_short_code};
use crate::utils::url_validator::validate_url;

/// Collisions tolerated before a shorten call gives up.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Runtime knobs for [`UrlService`].
#[derive(Debug, Clone)]
pub struct ShortenerSettings {
    pub code_length: usize,
    pub policy: ShortenPolicy,
    pub click_counting: ClickCounting,
    /// Prefix for short URLs, without trailing slash.
    pub base_url: String,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            policy: ShortenPolicy::default(),
            click_counting: ClickCounting::default(),
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

/// Result of a shorten call.
#[derive(Debug, Clone)]
pub struct ShortenOutcome {
    pub record: UrlRecord,
    /// `false` when an existing record was returned by deduplication.
    pub created: bool,
}

/// Service for creating and resolving short URLs.
///
/// Generic over the repository so tests can inject mocks; the server uses
/// `UrlService<dyn UrlRepository>`.
pub struct UrlService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
    settings: ShortenerSettings,
}

impl<R: UrlRepository + ?Sized> UrlService<R> {
    /// Creates a new URL service.
    pub fn new(repository: Arc<R>, settings: ShortenerSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    pub fn settings(&self) -> &ShortenerSettings {
        &self.settings
    }

    /// Shortens `original_url`.
    ///
    /// # Deduplication
    ///
    /// Under [`ShortenPolicy::Deduplicate`], an identical original URL returns
    /// the existing record with `created == false`.
    ///
    /// Two concurrent calls for the same new URL can both miss the initial
    /// lookup. After inserting, the oldest record for the URL is looked up
    /// again; if it is not ours, ours is deleted and the oldest is returned.
    /// Without a unique index on `original_url` this narrows the window but
    /// cannot close it: a record whose insert becomes visible late may still
    /// leave a duplicate behind.
    ///
    /// # Code Generation
    ///
    /// Codes that already exist are skipped, and a `DuplicateCode` from the
    /// store (a concurrent insert won the race) triggers another attempt. Gives
    /// up after [`MAX_GENERATION_ATTEMPTS`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not an absolute HTTP(S) URL.
    /// Returns [`AppError::Internal`] on exhausted retries, random source
    /// failure, or storage errors.
    pub async fn shorten(&self, original_url: &str) -> Result<ShortenOutcome, AppError> {
        validate_url(original_url)?;

        if self.settings.policy == ShortenPolicy::Deduplicate
            && let Some(record) = self.repository.get_by_original_url(original_url).await?
        {
            return Ok(ShortenOutcome {
                record,
                created: false,
            });
        }

        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_code(self.settings.code_length)?;

            if self.repository.exists(&code).await? {
                continue;
            }

            match self
                .repository
                .create(NewUrlRecord::new(original_url, code))
                .await
            {
                Ok(record) => return self.settle_duplicate(record).await,
                Err(StoreError::DuplicateCode(_)) => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }

    /// Keeps the oldest record when a concurrent shorten inserted the same URL.
    async fn settle_duplicate(&self, record: UrlRecord) -> Result<ShortenOutcome, AppError> {
        if self.settings.policy == ShortenPolicy::Deduplicate
            && let Some(oldest) = self
                .repository
                .get_by_original_url(&record.original_url)
                .await?
            && oldest.id != record.id
        {
            tracing::debug!(
                kept = %oldest.short_code,
                dropped = %record.short_code,
                "Concurrent shorten of the same URL, keeping oldest record"
            );
            self.repository.delete(&record.short_code).await?;
            return Ok(ShortenOutcome {
                record: oldest,
                created: false,
            });
        }

        Ok(ShortenOutcome {
            record,
            created: true,
        })
    }

    /// Resolves a short code for redirect and counts the click.
    ///
    /// The returned record carries the incremented `click_count`. When the
    /// increment fails under [`ClickCounting::BestEffort`], the failure is
    /// logged and the record is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed codes.
    /// Returns [`AppError::NotFound`] if no record has this code.
    pub async fn resolve(&self, code: &str) -> Result<UrlRecord, AppError> {
        let mut record = self.lookup(code).await?;

        match self.repository.increment_clicks(record.id).await {
            Ok(click_count) => record.click_count = click_count,
            Err(e) => match self.settings.click_counting {
                ClickCounting::Strict => return Err(e.into()),
                ClickCounting::BestEffort => {
                    tracing::warn!(code = %record.short_code, error = %e, "Failed to count click");
                }
            },
        }

        Ok(record)
    }

    /// Returns click statistics for a short code.
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve`], without touching the counter.
    pub async fn stats(&self, code: &str) -> Result<UrlStats, AppError> {
        Ok(self.lookup(code).await?.stats())
    }

    /// Lists records newest first, with the total record count.
    pub async fn list(&self, limit: i64, offset: i64) -> Result<(Vec<UrlRecord>, i64), AppError> {
        let records = self.repository.list(limit, offset).await?;
        let total = self.repository.count().await?;
        Ok((records, total))
    }

    /// Deletes a record by short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this code.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        Self::check_code(code)?;

        if self.repository.delete(code).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Short URL not found",
                json!({ "code": code }),
            ))
        }
    }

    /// Checks that the storage backend responds.
    pub async fn health_check(&self) -> Result<(), AppError> {
        Ok(self.repository.ping().await?)
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), code)
    }

    async fn lookup(&self, code: &str) -> Result<UrlRecord, AppError> {
        Self::check_code(code)?;

        self.repository.get_by_code(code).await.map_err(|e| match e {
            StoreError::NotFound => {
                AppError::not_found("Short URL not found", json!({ "code": code }))
            }
            other => other.into(),
        })
    }

    fn check_code(code: &str) -> Result<(), AppError> {
        if is_valid_short_code(code) {
            Ok(())
        } else {
            Err(AppError::bad_request(
                "Invalid short code",
                json!({ "code": code }),
            ))
        }
    }
}
