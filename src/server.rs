//! HTTP server initialization and runtime setup.
//!
//! Wires the in-memory store into the shortener service, builds the router and
//! runs Axum until a shutdown signal arrives.

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::persistence::InMemoryUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Returns once the server has drained after SIGINT or SIGTERM.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address cannot be resolved
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository: Arc<dyn UrlRepository> = Arc::new(InMemoryUrlRepository::new());
    let shortener = Arc::new(ShortenerService::new(repository));
    tracing::info!("In-memory URL store ready");

    let state = AppState::new(shortener, config.base_url.clone());
    let app = app_router(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(bind_addr.as_str())
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    let local_addr = listener
        .local_addr()
        .context("failed to read bound address")?;
    tracing::info!("Listening on http://{local_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
