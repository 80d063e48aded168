//! In-memory implementation of the URL repository.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::errors::StoreError;
use crate::domain::repositories::UrlRepository;

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    by_code: HashMap<String, UrlRecord>,
    code_by_id: HashMap<i64, String>,
    /// Ids per original URL in insertion order.
    ids_by_url: HashMap<String, Vec<i64>>,
}

/// Process-local repository backed by maps behind a single lock.
///
/// Suitable for tests and single-instance deployments; records do not survive
/// a restart. All mutation, including click increments, happens under the
/// write lock, so concurrent increments are never lost.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    inner: RwLock<Inner>,
}

impl MemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, StoreError> {
        let mut inner = self.write()?;

        if inner.by_code.contains_key(&new_record.short_code) {
            return Err(StoreError::DuplicateCode(new_record.short_code));
        }

        inner.last_id += 1;
        let record = UrlRecord::new(
            inner.last_id,
            new_record.original_url,
            new_record.short_code,
            new_record.created_at.unwrap_or_else(Utc::now),
            0,
        );

        inner
            .code_by_id
            .insert(record.id, record.short_code.clone());
        inner
            .ids_by_url
            .entry(record.original_url.clone())
            .or_default()
            .push(record.id);
        inner
            .by_code
            .insert(record.short_code.clone(), record.clone());

        Ok(record)
    }

    async fn get_by_code(&self, code: &str) -> Result<UrlRecord, StoreError> {
        self.read()?
            .by_code
            .get(code)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn get_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, StoreError> {
        let inner = self.read()?;

        let record = inner
            .ids_by_url
            .get(original_url)
            .and_then(|ids| ids.first())
            .and_then(|id| inner.code_by_id.get(id))
            .and_then(|code| inner.by_code.get(code))
            .cloned();

        Ok(record)
    }

    async fn increment_clicks(&self, id: i64) -> Result<i64, StoreError> {
        let mut inner = self.write()?;

        let code = inner.code_by_id.get(&id).cloned().ok_or(StoreError::NotFound)?;
        let record = inner.by_code.get_mut(&code).ok_or(StoreError::NotFound)?;
        record.click_count += 1;

        Ok(record.click_count)
    }

    async fn exists(&self, code: &str) -> Result<bool, StoreError> {
        Ok(self.read()?.by_code.contains_key(code))
    }

    async fn delete(&self, code: &str) -> Result<bool, StoreError> {
        let mut inner = self.write()?;

        let Some(record) = inner.by_code.remove(code) else {
            return Ok(false);
        };

        inner.code_by_id.remove(&record.id);
        if let Some(ids) = inner.ids_by_url.get_mut(&record.original_url) {
            ids.retain(|id| *id != record.id);
            if ids.is_empty() {
                inner.ids_by_url.remove(&record.original_url);
            }
        }

        Ok(true)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<UrlRecord>, StoreError> {
        let inner = self.read()?;

        let mut records: Vec<&UrlRecord> = inner.by_code.values().collect();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let offset = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);

        Ok(records
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let len = self.read()?.by_code.len();
        Ok(i64::try_from(len).unwrap_or(i64::MAX))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.read().map(|_| ())
    }
}
