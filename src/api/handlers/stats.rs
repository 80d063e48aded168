//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns click statistics for a short code.
///
/// # Endpoint
///
/// `GET /api/v1/urls/{code}/stats`
///
/// # Response
///
/// ```json
/// {
///   "short_code": "aB3_x9",
///   "original_url": "https://example.com",
///   "created_at": "2026-01-01T00:00:00Z",
///   "click_count": 1
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.url_service.stats(&code).await?;
    Ok(Json(stats.into()))
}
