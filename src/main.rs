use clap::Parser;
use shorten_url::config::{self, Cli};
use shorten_url::{server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load(Cli::parse())?;
    let telemetry = telemetry::init(&config)?;
    config.print_summary();

    let result = server::run(config).await;
    if let Err(e) = &result {
        tracing::error!("Server error: {:#}", e);
    }

    telemetry.shutdown();
    result
}
