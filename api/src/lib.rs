//! Folio API Server
//!
//! This crate provides the HTTP server for the Folio portfolio site. It renders
//! the site pages from templates, proxies the GitHub repository listing, and
//! streams live server logs to the developer log viewer.
//!
//! # Architecture
//!
//! The server is built on Axum and Tokio, providing:
//! - HTML pages rendered from Handlebars templates
//! - A JSON endpoint for GitHub projects
//! - A server-sent events stream of log lines at `/dev/logs`
//!
//! # Example
//!
//! ```no_run
//! use shared::devlog::Broadcaster;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     api::run_server(Broadcaster::new()).await
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
pub mod db;
mod routes;
mod state;

pub use config::{Config, LogFormat};
pub use state::AppState;

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::{Router, ServiceExt};
use shared::devlog::Broadcaster;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Time allowed for a handler to produce response headers.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// The complete service: [`create_router`] behind trailing-slash trimming.
pub type App = NormalizePath<Router>;

/// Runs the Folio API server.
///
/// This function initializes the server with configuration from environment variables
/// and starts listening for incoming connections. It handles graceful shutdown on
/// SIGTERM/SIGINT signals.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - Templates or the database cannot be loaded
/// - The server fails to bind to the configured address
pub async fn run_server(broadcaster: Broadcaster) -> Result<()> {
    let config = Config::from_env()?;
    run_server_with_config(config, broadcaster).await
}

/// Runs the Folio API server with the provided configuration.
///
/// `broadcaster` should be the one installed in the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if:
/// - Templates or the database cannot be loaded
/// - The server fails to bind to the configured address
/// - A fatal error occurs during operation
pub async fn run_server_with_config(config: Config, broadcaster: Broadcaster) -> Result<()> {
    let addr = config.socket_addr()?;

    let state = AppState::from_config(&config, broadcaster).await?;
    let shutdown = state.shutdown_token().clone();
    let app = create_app(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(addr = %addr, "starting server");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            // Ends open log streams so the server can drain.
            shutdown.cancel();
        })
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Creates the main application router with all routes and middleware.
///
/// This function is public to allow testing the router without starting a full server.
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(state.static_dir());

    Router::new()
        .merge(routes::page_routes(state.clone()))
        .merge(routes::blog_routes(state.clone()))
        .merge(routes::project_routes(state.clone()))
        .merge(routes::devlog_routes(state.clone()))
        .merge(routes::health_routes(state))
        .nest_service("/static", static_files)
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
}

/// Creates the service the server runs.
///
/// Paths are matched with any trailing slash removed, so `/resume/` reaches
/// the `/resume` route. Trimming must wrap the router, since layers inside
/// it run after routing.
pub fn create_app(state: AppState) -> App {
    NormalizePathLayer::trim_trailing_slash().layer(create_router(state))
}

/// Waits for a shutdown signal (SIGTERM or SIGINT).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
