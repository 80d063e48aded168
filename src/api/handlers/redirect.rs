//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Reject malformed codes without touching storage
/// 2. Look up the record
/// 3. Count the click (strict or best-effort, per configuration)
/// 4. Return 302 Found
///
/// # Errors
///
/// Returns 400 Bad Request for malformed codes.
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = state.url_service.resolve(&code).await?;

    tracing::debug!(code = %code, clicks = record.click_count, "Redirecting");

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, record.original_url)],
    )
        .into_response())
}
