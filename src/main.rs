use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use swipe_tracker::api::{AppState, create_router};
use swipe_tracker::config::ConfigLoader;
use swipe_tracker::store::InMemorySwipeLog;

const CONFIG_PATH_VAR: &str = "SWIPE_TRACKER_CONFIG";
const ADDR_VAR: &str = "SWIPE_TRACKER_ADDR";
const DEFAULT_CONFIG_PATH: &str = "./config/tracker.yaml";
const DEFAULT_ADDR: &str = "127.0.0.1:8000";

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();
    info!("Swipe tracker v{} starting", env!("CARGO_PKG_VERSION"));

    let config_path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = match ConfigLoader::load(&config_path) {
        Ok(loader) => loader.into_config(),
        Err(err) => {
            error!(path = %config_path, error = %err, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(config, Arc::new(InMemorySwipeLog::new()));
    let router = create_router(state);

    let addr = env::var(ADDR_VAR).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(addr = %addr, error = %err, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %addr, "Listening");
    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server terminated");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
