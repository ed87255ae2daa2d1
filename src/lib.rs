//! # shorten-url
//!
//! A small URL shortening service built with Axum. Short codes are derived
//! from a SHA-256 hash of the URL, so shortening the same URL twice yields the
//! same code; hash collisions between different URLs are resolved by retrying
//! with a perturbed input.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits and core errors
//! - **Application Layer** ([`application`]) - The shortener service
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory storage
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Endpoints
//!
//! - `POST /` - plain-text URL in, plain-text short URL out
//! - `POST /api/shorten` - `{"url": "..."}` in, `{"result": "..."}` out
//! - `GET /{code}` - 307 redirect to the original URL
//! - `GET /health` - health report
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- -a :8080 -b http://localhost:8080
//! curl -X POST --data 'https://example.com' http://localhost:8080/
//! ```
//!
//! ## Configuration
//!
//! See [`config`] for flags and environment variables.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::DomainError;
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::repositories::{SaveOutcome, UrlRepository};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryUrlRepository;
    pub use crate::state::AppState;
}
