//! DTOs for the health endpoint.

use serde::Serialize;

/// Overall service state reported by `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// State of one probed component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Ok,
    Error,
}

/// Health report.
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": { "store": { "status": "ok", "message": "Records: 42" } }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: StoreProbe,
}

/// Result of reading the URL store.
#[derive(Debug, Serialize)]
pub struct StoreProbe {
    pub status: ProbeStatus,
    pub message: String,
}

impl HealthResponse {
    /// Builds the report from the store probe; any failing probe degrades the
    /// service.
    pub fn from_store(store: StoreProbe) -> Self {
        let status = match store.status {
            ProbeStatus::Ok => ServiceStatus::Healthy,
            ProbeStatus::Error => ServiceStatus::Degraded,
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { store },
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == ServiceStatus::Healthy
    }
}
