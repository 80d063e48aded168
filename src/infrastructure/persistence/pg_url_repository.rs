//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::errors::StoreError;
use crate::domain::repositories::UrlRepository;

/// Name of the unique constraint on `urls.short_code`.
const SHORT_CODE_CONSTRAINT: &str = "urls_short_code_key";

/// PostgreSQL repository for URL records.
///
/// Uses bound parameters for every query. Click increments are a single
/// relative `UPDATE`, so concurrent redirects never lose counts.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation() && db_err.constraint() == Some(SHORT_CODE_CONSTRAINT)
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, StoreError> {
        sqlx::query_as::<_, UrlRecord>(
            r#"
            INSERT INTO urls (original_url, short_code, created_at, click_count)
            VALUES ($1, $2, COALESCE($3, NOW()), 0)
            RETURNING id, original_url, short_code, created_at, click_count
            "#,
        )
        .bind(&new_record.original_url)
        .bind(&new_record.short_code)
        .bind(new_record.created_at)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_code(&e) {
                StoreError::DuplicateCode(new_record.short_code.clone())
            } else {
                StoreError::from(e)
            }
        })
    }

    async fn get_by_code(&self, code: &str) -> Result<UrlRecord, StoreError> {
        sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, original_url, short_code, created_at, click_count
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn get_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, StoreError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, original_url, short_code, created_at, click_count
            FROM urls
            WHERE original_url = $1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn increment_clicks(&self, id: i64) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>(
            "UPDATE urls SET click_count = click_count + 1 WHERE id = $1 RETURNING click_count",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn exists(&self, code: &str) -> Result<bool, StoreError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM urls WHERE short_code = $1)")
                .bind(code)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn delete(&self, code: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM urls WHERE short_code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<UrlRecord>, StoreError> {
        let records = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, original_url, short_code, created_at, click_count
            FROM urls
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(records)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
