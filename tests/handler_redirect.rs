mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::json;
use shorten_url::api::handlers::redirect_handler;

#[tokio::test]
async fn test_redirect_success() {
    let (state, repo) = common::create_test_state();
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_link(&repo, "redirect1", "https://example.com/target").await;

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _repo) = common::create_test_state();
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/doesnotexist").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_after_shorten() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let result = response.json::<serde_json::Value>();
    let short_url = result["result"].as_str().unwrap();
    let code = short_url.rsplit('/').next().unwrap();
    assert_eq!(code.len(), 7);

    let redirect = server.get(&format!("/{code}")).await;

    assert_eq!(redirect.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(redirect.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_redirect_preserves_query_string_of_target() {
    let (server, repo) = common::create_test_server();

    common::create_test_link(&repo, "querys1", "https://example.com/search?q=rust&page=2").await;

    let response = server.get("/querys1").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(
        response.header("location"),
        "https://example.com/search?q=rust&page=2"
    );
}
