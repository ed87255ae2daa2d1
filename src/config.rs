//! Application configuration loaded from command-line flags and environment.
//!
//! Each setting can be given as a flag; a non-empty environment variable of
//! the same setting takes precedence over the flag.
//!
//! | Flag | Environment | Default |
//! |---|---|---|
//! | `-a`, `--address` | `SERVER_ADDRESS` | `:8080` |
//! | `-b`, `--base-url` | `BASE_URL` | `http://localhost:8080` |
//! | `-l`, `--log-level` | `LOG_LEVEL` | `info` |
//! | `--log-format` | `LOG_FORMAT` | `text` |
//!
//! ```bash
//! export SERVER_ADDRESS="127.0.0.1:9000"
//! export BASE_URL="https://s.example.com"
//! shorten-url -l debug
//! ```
//!
//! An address without a host (`:8080`) binds on all interfaces. Hostnames such
//! as `localhost:8888` are resolved when the server binds.

use anyhow::{Context, Result};
use clap::Parser;
use std::env;

pub const DEFAULT_ADDRESS: &str = ":8080";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Command-line flags.
#[derive(Debug, Clone, Parser)]
#[command(name = "shorten-url", version, about = "In-memory URL shortener")]
pub struct Cli {
    /// Address the HTTP server listens on (`host:port` or `:port`).
    #[arg(short = 'a', long = "address", default_value = DEFAULT_ADDRESS)]
    pub address: String,

    /// Base URL prepended to generated short codes.
    #[arg(short = 'b', long = "base-url", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log filter, e.g. `info` or `shorten_url=debug`.
    #[arg(short = 'l', long = "log-level", default_value = "info")]
    pub log_level: String,

    /// Log output format: `text` or `json`.
    #[arg(long = "log-format", default_value = "text")]
    pub log_format: String,
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Builds configuration from parsed flags, letting environment variables
    /// override them.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            listen_addr: env_or("SERVER_ADDRESS", cli.address),
            base_url: env_or("BASE_URL", cli.base_url),
            log_level: env_or("LOG_LEVEL", cli.log_level),
            log_format: env_or("LOG_FORMAT", cli.log_format),
        }
    }

    /// Address to bind, with an empty host meaning all interfaces.
    ///
    /// Hostnames are kept as given and resolved when the listener binds.
    pub fn bind_addr(&self) -> String {
        if self.listen_addr.starts_with(':') {
            format!("0.0.0.0{}", self.listen_addr)
        } else {
            self.listen_addr.clone()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` does not end in `:port` with a numeric port
    /// - `base_url` is not an http(s) URL
    /// - `log_level` is empty
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        let port = self
            .listen_addr
            .rsplit_once(':')
            .map(|(_, port)| port)
            .with_context(|| format!("listen address '{}' has no port", self.listen_addr))?;
        port.parse::<u16>().with_context(|| {
            format!("invalid port '{port}' in listen address '{}'", self.listen_addr)
        })?;

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.log_level.trim().is_empty() {
            anyhow::bail!("LOG_LEVEL must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn env_or(key: &str, fallback: String) -> String {
    match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => fallback,
    }
}

/// Builds and validates configuration from flags and environment.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects `.env` to be already loaded (e.g., via
/// `dotenvy::dotenv()` in `main.rs`).
pub fn load(cli: Cli) -> Result<Config> {
    let config = Config::from_cli(cli);
    config.validate()?;
    Ok(config)
}
