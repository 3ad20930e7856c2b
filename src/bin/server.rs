//! Reserva HTTP Server Binary
//!
//! This is the main entry point for the booking REST API server. It
//! initializes the repository, spawns the expiry sweeper, sets up the HTTP
//! router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin reserva-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 3000)
//! - `RESERVA_REPOSITORY`: Store backend (default: local)
//! - `SWEEP_INTERVAL_SECS`: Expiry sweep period (default: 60)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use reserva_rust::db::{self, RepositoryConfig};
use reserva_rust::http::{create_router, AppState};
use reserva_rust::services::{BookingService, ExpirySweeper};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Reserva HTTP Server");

    // Optional reserva.toml; falls back to defaults.
    let config = RepositoryConfig::from_default_location();

    // Initialize global repository once and reuse it across the app
    db::init_repository().map_err(|e| anyhow::anyhow!(e))?;
    let repository = std::sync::Arc::clone(db::get_repository()?);
    info!("Repository initialized successfully");

    let booking = BookingService::new(repository);

    // Background expiry sweeper, owned by this process and stopped on
    // shutdown.
    let sweep_period = Duration::from_secs(config.sweep_interval_secs());
    let sweeper = ExpirySweeper::spawn(booking.clone(), sweep_period);

    // Create application state and router
    let state = AppState::new(booking);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.shutdown();
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown signal handler");
    }
}
