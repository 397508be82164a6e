//! availability-board server entry point.
//!
//! Loads configuration, opens the store, ensures the schema, and serves
//! the HTTP routes until Ctrl-C.

use tracing_subscriber::EnvFilter;

use availability_board::api;
use availability_board::app_state::AppState;
use availability_board::config::{BoardConfig, LogFormat};
use availability_board::persistence::Storage;
use availability_board::service::ScheduleService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = BoardConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting availability-board");

    // Open storage
    let storage = Storage::connect(&config.storage()).await?;
    storage.ensure_schema().await?;

    // Build application state and router
    let listen_addr = config.listen_addr;
    let service = ScheduleService::new(storage.clone());
    let app = api::build_app(AppState::new(service, config));

    // Start server
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    tracing::info!(addr = %listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    storage.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
