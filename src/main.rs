//! HTTP server for the Attendance Budget Engine.
//!
//! Environment:
//! - `ATTENDANCE_CONFIG_DIR`: policy directory (default `./config/obs`)
//! - `ATTENDANCE_BIND_ADDR`: listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG`: log filter (default `info`)

use std::env;
use std::sync::Arc;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;
use attendance_engine::reconciliation::reconcile_absences;
use attendance_engine::repository::InMemoryRepository;
use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

const DEFAULT_CONFIG_DIR: &str = "./config/obs";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

fn build_filter() -> Result<EnvFilter, ParseError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new("info"),
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter()?)
        .with_target(true)
        .init();

    let config_dir = env_or("ATTENDANCE_CONFIG_DIR", DEFAULT_CONFIG_DIR);
    let bind_addr = env_or("ATTENDANCE_BIND_ADDR", DEFAULT_BIND_ADDR);

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        institution = %config.institution().code,
        version = %config.institution().version,
        "Configuration loaded"
    );

    let repository = Arc::new(InMemoryRepository::new());
    if config.backfill().enabled {
        // Sets the watermark so later runs only look at days after startup
        reconcile_absences(
            repository.as_ref(),
            Utc::now().date_naive(),
            &config.backfill().note,
        )?;
    }

    let app = create_router(AppState::new(config, repository));
    let listener = tokio::net::TcpListener::bind(bind_addr.as_str()).await?;
    info!(addr = %bind_addr, "Attendance server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
