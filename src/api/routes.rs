//! API route configuration.

use crate::api::handlers::shorten_json_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten` - Shorten a URL sent as `{"url": "..."}`
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_json_handler))
}
