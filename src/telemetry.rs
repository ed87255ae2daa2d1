//! Logging setup and lifecycle.
//!
//! [`init`] installs the `tracing` subscriber once at startup and hands back a
//! [`TelemetryGuard`]. Log lines are written by a background worker; dropping
//! the guard (or calling [`TelemetryGuard::shutdown`]) flushes whatever is
//! still buffered, so `main` keeps it alive until the server has stopped.

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Keeps the log writer alive; flushes pending lines when dropped.
#[must_use = "dropping the guard stops log output"]
pub struct TelemetryGuard {
    _worker: WorkerGuard,
}

impl TelemetryGuard {
    /// Flushes buffered log lines and stops the writer thread.
    pub fn shutdown(self) {
        tracing::info!("Flushing logs");
    }
}

/// Installs the global `tracing` subscriber described by `config`.
///
/// # Errors
///
/// Returns an error if `log_level` is not a valid filter directive or a
/// subscriber has already been installed.
pub fn init(config: &Config) -> Result<TelemetryGuard> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("invalid LOG_LEVEL '{}'", config.log_level))?;

    let (writer, worker) = tracing_appender::non_blocking(std::io::stdout());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    let installed = if config.log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(TelemetryGuard { _worker: worker })
}
