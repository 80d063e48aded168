//! URL record entity representing one shortening mapping.

use chrono::{DateTime, Utc};

/// A stored mapping from short code to original URL.
///
/// Everything except `click_count` is fixed once the store assigns the `id`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
        click_count: i64,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
            click_count,
        }
    }

    /// Projects the record onto its public statistics.
    pub fn stats(&self) -> UrlStats {
        UrlStats {
            short_code: self.short_code.clone(),
            original_url: self.original_url.clone(),
            created_at: self.created_at,
            click_count: self.click_count,
        }
    }
}

/// Input data for creating a new record.
///
/// `created_at` is stamped by the store when left as `None`.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub short_code: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewUrlRecord {
    pub fn new(original_url: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_code: short_code.into(),
            created_at: None,
        }
    }
}

/// Click statistics for a single short code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlStats {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}
