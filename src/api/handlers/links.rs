//! Handlers for link administration (listing and deletion).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::pagination::ListParams;
use crate::api::dto::stats::{LinkItem, LinkListResponse, PaginationMeta};
use crate::error::AppError;
use crate::state::AppState;

/// Lists short URLs, newest first.
///
/// # Endpoint
///
/// `GET /api/v1/urls?limit=25&offset=0`
///
/// # Errors
///
/// Returns 400 Bad Request if `limit` is outside 1-1000.
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<LinkListResponse>, AppError> {
    let (limit, offset) = params
        .validate_and_get_limit_offset()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let (records, total) = state.url_service.list(limit, offset).await?;

    let items = records
        .into_iter()
        .map(|record| {
            let short_url = state.url_service.short_url(&record.short_code);
            LinkItem::from_record(record, short_url)
        })
        .collect();

    Ok(Json(LinkListResponse {
        pagination: PaginationMeta {
            limit,
            offset,
            total,
        },
        items,
    }))
}

/// Deletes a short URL.
///
/// # Endpoint
///
/// `DELETE /api/v1/urls/{code}`
///
/// # Response
///
/// `204 No Content` on success.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, AppError> {
    state.url_service.delete(&code).await?;
    tracing::info!(code = %code, "Short URL deleted");
    Ok(StatusCode::NO_CONTENT)
}
