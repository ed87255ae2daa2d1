//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /`             - Shorten a plain-text URL
//! - `GET  /health`       - Health check
//! - `GET  /{code}`       - Short link redirect
//! - `/api/*`             - JSON API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Decompression** - Gzip request bodies
//! - **Compression** - Gzip responses for clients that accept it

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler, shorten_text_handler};
use crate::api::middleware::{compression, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::ServiceBuilder;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(shorten_text_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(tracing::layer())
                .layer(compression::decompression_layer())
                .layer(compression::compression_layer()),
        )
}
