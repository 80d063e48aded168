//! API route configuration.

use crate::api::handlers::{
    delete_link_handler, list_links_handler, shorten_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// Versioned REST routes, nested under `/api/v1`.
///
/// # Endpoints
///
/// - `POST   /urls`               - Shorten a URL
/// - `GET    /urls`               - List short URLs (paginated)
/// - `GET    /urls/{code}/stats`  - Click statistics for a short code
/// - `DELETE /urls/{code}`        - Delete a short URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", get(list_links_handler).post(shorten_handler))
        .route("/urls/{code}", delete(delete_link_handler))
        .route("/urls/{code}/stats", get(stats_handler))
}
