//! Opening hours HTTP server.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin hours-server
//! PORT=9000 ALLOWED_HOSTS=https://example.com cargo run --bin hours-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOURS_CONFIG`: Path to a TOML config file (default: ./hours.toml if present)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `API_PREFIX`: Route prefix (default: /api)
//! - `ALLOWED_HOSTS`: Comma-separated CORS origins (default: any)
//! - `DEBUG`: Enable debug logging (default: false)
//! - `RUST_LOG`: Log filter (default: info)

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use opening_hours::config::ServerConfig;
use opening_hours::http::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = ServerConfig::load_with_source()?;

    let default_level = if config.debug { "debug" } else { "info" };
    let filter = env::var("RUST_LOG")
        .ok()
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting opening hours server");
    info!(
        source = %source,
        prefix = %config.api_prefix,
        origins = ?config.allowed_origins,
        debug = config.debug,
        "Configuration loaded"
    );

    let addr = config.bind_address()?;
    let app = create_router(&config);

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}{}/healthcheck", addr, config.api_prefix);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
