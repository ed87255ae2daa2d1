//! DTOs for the JSON shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// ```json
/// { "url": "https://practicum.yandex.ru/" }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,
}

/// Response carrying the full short URL.
///
/// ```json
/// { "result": "http://localhost:8080/QrPnX5I" }
/// ```
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub result: String,
}
