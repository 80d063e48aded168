//! Repository trait for short code storage.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Storage contract for URL records.
///
/// Guarantees `short_code` uniqueness and atomic click counting. Backends are
/// chosen once at startup and shared behind an `Arc<dyn UrlRepository>`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - In-process maps behind a lock
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record and returns it with its assigned `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateCode`] if the short code is already taken.
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, StoreError>;

    /// Exact-match lookup by short code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this code.
    async fn get_by_code(&self, code: &str) -> Result<UrlRecord, StoreError>;

    /// Finds the oldest record pointing at `original_url`.
    async fn get_by_original_url(&self, original_url: &str)
    -> Result<Option<UrlRecord>, StoreError>;

    /// Atomically adds one to `click_count` and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this id.
    async fn increment_clicks(&self, id: i64) -> Result<i64, StoreError>;

    /// Returns whether a record with this short code exists.
    async fn exists(&self, code: &str) -> Result<bool, StoreError>;

    /// Removes a record.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if none matched.
    async fn delete(&self, code: &str) -> Result<bool, StoreError>;

    /// Lists records, newest first.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<UrlRecord>, StoreError>;

    /// Counts all records.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
