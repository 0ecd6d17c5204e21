use anyhow::{Context, Result};
use clap::Parser;
use job_board::cli::{handle_command, JobBoardCli};
use job_board::core::ConfigManager;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = JobBoardCli::parse();
    let config = ConfigManager::load()?;

    // Stdout belongs to the page, logs go to a file
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.logging.log_path)
        .with_context(|| {
            format!(
                "Failed to open log file {}",
                config.logging.log_path.display()
            )
        })?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .context("Invalid log filter")?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(Mutex::new(file))
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();

    info!("Starting job board client");
    info!("Environment: {}", config.environment);
    info!("API: {}", config.service.api_url);

    handle_command(cli, config).await
}
