//! Handler for the health endpoint.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::health::{HealthResponse, ProbeStatus, StoreProbe};
use crate::state::AppState;

/// Reports whether the URL store is readable.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: store readable, message carries the record count
/// - **503 Service Unavailable**: store read failed
pub async fn health_handler(State(state): State<AppState>) -> Response {
    let report = HealthResponse::from_store(probe_store(&state).await);

    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(report)).into_response()
}

async fn probe_store(state: &AppState) -> StoreProbe {
    match state.shortener.record_count().await {
        Ok(count) => StoreProbe {
            status: ProbeStatus::Ok,
            message: format!("Records: {count}"),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Store health probe failed");
            StoreProbe {
                status: ProbeStatus::Error,
                message: format!("Store error: {e}"),
            }
        }
    }
}
