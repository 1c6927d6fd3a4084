use anyhow::{Context, Result};
use clap::Parser;
use job_assistant::cli::{handle_command, Cli};
use job_assistant::core::{ConfigManager, Database};
use std::fs::OpenOptions;
use tracing::{error, info};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ConfigManager::load()?;
    if let Some(path) = cli.database.clone() {
        config = config.with_database_path(path);
    }
    config.ensure_directories().await?;

    // Logs go to a file so command output on stdout stays clean
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.environment.log_path)
        .with_context(|| {
            format!(
                "Failed to open log file: {}",
                config.environment.log_path.display()
            )
        })?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Environment: {}", config.environment.name);
    info!("Database: {}", config.environment.database_path.display());

    let database = Database::new(&config.environment.database_path).await?;

    if let Err(e) = handle_command(cli.command, &database, &config).await {
        if e.is_user_error() {
            info!("Command rejected: {}", e);
        } else {
            error!("Command failed: {}", e);
        }
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}
