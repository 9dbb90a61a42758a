//! Time Tracker Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use tracker_core::config::AppConfig;
use tracker_core::error::AppError;
use tracker_database::DatabasePool;
use tracker_people::HttpPeopleDirectory;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from `config/` and the environment.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("TRACKER_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_current_span(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting time tracker");

    let db = DatabasePool::connect(&config.database).await?;

    if config.database.auto_migrate {
        tracker_database::migration::run_migrations(db.pool()).await?;
    }

    let people = Arc::new(HttpPeopleDirectory::new(&config.people)?);
    tracing::info!(base_url = %config.people.base_url, "People lookup client ready");

    let result = tracker_api::run_server(config, db.pool().clone(), people).await;

    db.close().await;
    result
}
