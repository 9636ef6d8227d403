use std::sync::Arc;

use clap::Parser;
use tokio::signal;

use rollcall::errors::Report;
use rollcall::log;

mod config;
mod handlers;
mod routes;
mod services;

use config::Config;
use services::ActivityServiceInMemory;

/// State shared by every request handler.
pub struct AppState {
    pub activities: ActivityServiceInMemory,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub index_path: String,
}

impl AppState {
    pub fn new(activities: ActivityServiceInMemory, index_path: impl Into<String>) -> Self {
        Self {
            activities,
            started_at: chrono::Utc::now(),
            index_path: index_path.into(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Setup logging
    rollcall::log::setup()?;

    let config = Config::parse();
    let policy = config.policy();
    log::debug!("Loaded config: {:?}", config);

    // Seed the directory
    let activities = ActivityServiceInMemory::new(rollcall::seed::activities(), policy);
    let state = Arc::new(AppState::new(activities, config.index_path.clone()));

    // Setup the routes
    let app = routes::setup_routes(state);

    // Setup the server
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    log::info!("Starting server on http://{}", listener.local_addr()?);
    log::info!(
        "Capacity enforced: {}, duplicates rejected: {}",
        policy.enforce_capacity,
        policy.reject_duplicates
    );
    log::info!("Press Ctrl+C to stop the server");

    // Start the server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Shutting down server");

    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Signal received, starting graceful shutdown");
}
