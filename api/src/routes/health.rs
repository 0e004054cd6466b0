//! Health check endpoint.
//!
//! Provides a simple health check endpoint for load balancers and monitoring systems.

use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status (always "healthy" if reachable).
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Database connectivity ("ok" or "unavailable").
    pub database: &'static str,
}

/// Creates the health check routes.
pub fn health_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(state)
}

/// Health check handler.
///
/// Returns a simple JSON response indicating the service is healthy.
/// The database is probed but its failure does not fail the check.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.database().ping().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "database ping failed");
            "unavailable"
        }
    };

    Json(HealthResponse {
        status: "healthy",
        service: "folio-api",
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}
