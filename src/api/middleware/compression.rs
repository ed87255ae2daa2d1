//! Gzip handling for request and response bodies.

use tower_http::compression::CompressionLayer;
use tower_http::decompression::RequestDecompressionLayer;

/// Compresses responses with gzip when the client sends `Accept-Encoding: gzip`.
///
/// Small bodies, images and event streams are passed through unchanged.
pub fn compression_layer() -> CompressionLayer {
    CompressionLayer::new()
}

/// Inflates request bodies sent with `Content-Encoding: gzip`.
///
/// Requests with an encoding other than gzip or identity are rejected with
/// `415 Unsupported Media Type`.
pub fn decompression_layer() -> RequestDecompressionLayer {
    RequestDecompressionLayer::new()
}
