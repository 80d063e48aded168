//! DTOs for link statistics and listings.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{UrlRecord, UrlStats};

/// Click statistics for a single short code.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl From<UrlStats> for StatsResponse {
    fn from(stats: UrlStats) -> Self {
        Self {
            short_code: stats.short_code,
            original_url: stats.original_url,
            created_at: stats.created_at,
            click_count: stats.click_count,
        }
    }
}

/// One entry of the link listing.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub id: i64,
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl LinkItem {
    pub fn from_record(record: UrlRecord, short_url: String) -> Self {
        Self {
            id: record.id,
            short_code: record.short_code,
            short_url,
            original_url: record.original_url,
            created_at: record.created_at,
            click_count: record.click_count,
        }
    }
}

/// Pagination metadata for list responses.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub limit: i64,
    pub offset: i64,
    pub total: i64,
}

/// Paginated link listing, newest first.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<LinkItem>,
}
