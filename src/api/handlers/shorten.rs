//! Handlers for link shortening endpoints.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL sent as a raw request body.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// The URL as plain text. Surrounding whitespace is ignored.
///
/// ```text
/// https://practicum.yandex.ru/
/// ```
///
/// # Response
///
/// `201 Created` with the short URL as `text/plain`:
///
/// ```text
/// http://localhost:8080/QrPnX5I
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is empty or not a well-formed URL.
pub async fn shorten_text_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let original = body.trim();
    if original.is_empty() {
        return Err(AppError::bad_request(
            "Missing URL in request body",
            json!({}),
        ));
    }

    let record = state.shortener.shorten(original).await?;
    let short_url = state.short_url(&record.code);

    Ok((
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        short_url,
    ))
}

/// Shortens a URL sent in a JSON envelope.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://practicum.yandex.ru/" }
/// ```
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// { "result": "http://localhost:8080/QrPnX5I" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON of the shape above, or if
/// `url` is empty or not a well-formed URL.
pub async fn shorten_json_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let record = state.shortener.shorten(&payload.url).await?;
    let result = state.short_url(&record.code);

    Ok((StatusCode::CREATED, Json(ShortenResponse { result })))
}
