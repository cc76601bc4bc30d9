//! SSP Plugin Server - Main Application Entry Point
//!
//! A minimal authenticated HTTP server for plugins: a health check, a
//! capabilities listing, and one protected endpoint that validates and
//! echoes a JSON object.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Authentication**: single static API key in the `X-API-Key` header
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables (and `.env`)
//! 2. Refuse to start if `SSP_API_KEY` is missing
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port until SIGINT/SIGTERM

mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod routes;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration; nothing is bound until this succeeds
    let config = match config::Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(err) => {
            tracing::error!("{err}");
            return Err(err.into());
        }
    };
    tracing::info!(?config, "Configuration loaded");

    let app = routes::build_router(config.clone());

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))
        .inspect_err(|err| tracing::error!("{err:#}"))?;

    tracing::info!("SSP Plugin Server listening on {}", addr);
    tracing::info!("Health: http://localhost:{}/health", config.port);
    tracing::info!("Capabilities: http://localhost:{}/capabilities", config.port);

    // Handles requests concurrently until a shutdown signal arrives
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
