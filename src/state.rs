//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortenerService;

/// Application state cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    /// Prefix for generated short URLs, e.g. `http://localhost:8080`.
    pub base_url: Arc<str>,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService>, base_url: impl Into<String>) -> Self {
        Self {
            shortener,
            base_url: Arc::from(base_url.into()),
        }
    }

    /// Full short URL for `code`, tolerating a trailing slash on the base.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
