mod common;

use axum::body::Bytes;
use axum::http::StatusCode;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use serde_json::json;
use shorten_url::domain::repositories::UrlRepository;
use std::io::{Read, Write};

fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn gunzip(data: &[u8]) -> String {
    let mut decoder = GzDecoder::new(data);
    let mut out = String::new();
    decoder.read_to_string(&mut out).unwrap();
    out
}

#[tokio::test]
async fn test_accepts_gzip_request_body() {
    let (server, repo) = common::create_test_server();

    let body = gzip(br#"{ "url": "https://yandex.ru" }"#);

    let response = server
        .post("/api/shorten")
        .content_type("application/json")
        .add_header("content-encoding", "gzip")
        .bytes(Bytes::from(body))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({ "result": "http://localhost:8080/FgAJzmB" }));
    assert!(response.headers().get("content-encoding").is_none());
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_accepts_gzip_plain_text_body() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/")
        .content_type("text/plain")
        .add_header("content-encoding", "gzip")
        .bytes(Bytes::from(gzip(b"https://example.com")))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.text(), "http://localhost:8080/EAaArVR");
}

#[tokio::test]
async fn test_compresses_json_response() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .add_header("accept-encoding", "gzip")
        .json(&json!({ "url": "https://yandex.ru" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.header("content-encoding"), "gzip");

    let body: serde_json::Value = serde_json::from_str(&gunzip(&response.as_bytes())).unwrap();
    assert_eq!(body, json!({ "result": "http://localhost:8080/FgAJzmB" }));
}

#[tokio::test]
async fn test_gzip_in_and_out() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .content_type("application/json")
        .add_header("content-encoding", "gzip")
        .add_header("accept-encoding", "gzip")
        .bytes(Bytes::from(gzip(br#"{"url":"https://practicum.yandex.ru/"}"#)))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.header("content-encoding"), "gzip");

    let body: serde_json::Value = serde_json::from_str(&gunzip(&response.as_bytes())).unwrap();
    assert_eq!(body["result"], "http://localhost:8080/QrPnX5I");
}

#[tokio::test]
async fn test_no_compression_without_accept_encoding() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://yandex.ru" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert!(response.headers().get("content-encoding").is_none());
}

#[tokio::test]
async fn test_rejects_unknown_request_encoding() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .content_type("application/json")
        .add_header("content-encoding", "compress")
        .bytes(Bytes::from_static(b"whatever"))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
}
