//! # ig-autopost
//!
//! Entry point for the Instagram Auto Post web service.
//!
//! ## Environment Variables
//!
//! - `IG_APP_ID`, `IG_APP_SECRET`, `IG_USER_ID`, `IG_ACCESS_TOKEN`, `IG_PAGE_ID`
//! - `PORT`: Server port (defaults to 8000)
//! - `RUST_LOG`: Log level filter for `env_logger`

use ig_autopost::{create_router, get_server_port, InstagramClient, InstagramConfig};
use log::{error, info};
use std::net::SocketAddr;

/// Main entry point for the ig-autopost web service.
///
/// This function initializes the logging system, loads the Instagram credentials, builds
/// the Graph API client and serves the HTTP routes until Ctrl-C is received.
///
/// # Example Usage
///
/// ```bash
/// # Run with default port 8000
/// cargo run
///
/// # Run on custom port with debug logging
/// PORT=8080 RUST_LOG=debug cargo run
/// ```
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize the logging system
    env_logger::init();

    let config = InstagramConfig::from_env();
    let client = InstagramClient::new(config).map_err(|e| {
        error!("Failed to create Instagram client: {}", e);
        e
    })?;

    let app = create_router(client);

    // Get the server port and bind address
    let port = get_server_port();
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    info!("Starting ig-autopost server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        e
    })?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("HTTP server error: {}", e);
            e
        })?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
