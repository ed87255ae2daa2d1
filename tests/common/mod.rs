#![allow(dead_code)]

use axum_test::TestServer;
use shorten_url::application::services::ShortenerService;
use shorten_url::domain::entities::UrlRecord;
use shorten_url::domain::repositories::UrlRepository;
use shorten_url::infrastructure::persistence::InMemoryUrlRepository;
use shorten_url::routes::app_router;
use shorten_url::state::AppState;
use std::sync::Arc;

pub const TEST_BASE_URL: &str = "http://localhost:8080";

pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRepository>) {
    let repo = Arc::new(InMemoryUrlRepository::new());
    let repository: Arc<dyn UrlRepository> = repo.clone();
    let shortener = Arc::new(ShortenerService::new(repository));

    (AppState::new(shortener, TEST_BASE_URL), repo)
}

pub fn create_test_server() -> (TestServer, Arc<InMemoryUrlRepository>) {
    let (state, repo) = create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();
    (server, repo)
}

pub async fn create_test_link(repo: &InMemoryUrlRepository, code: &str, url: &str) {
    repo.save(UrlRecord::new(code, url)).await.unwrap();
}
