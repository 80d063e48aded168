//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/v1/urls`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created` for a new record, `200 OK` when an existing record was
/// returned by deduplication:
///
/// ```json
/// {
///   "short_code": "aB3_x9",
///   "short_url": "http://localhost:8080/aB3_x9",
///   "original_url": "https://example.com",
///   "created_at": "2026-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing or invalid.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let outcome = state.url_service.shorten(&payload.url).await?;
    let record = outcome.record;

    let status = if outcome.created {
        tracing::info!(code = %record.short_code, "Short URL created");
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    let response = ShortenResponse {
        short_url: state.url_service.short_url(&record.short_code),
        short_code: record.short_code,
        original_url: record.original_url,
        created_at: record.created_at,
    };

    Ok((status, Json(response)))
}
