//! Integration tests for the health check endpoint.

use axum::http::StatusCode;

use super::common::{get_json, test_app};

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;

    let (status, response) = get_json(app.router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "healthy");
    assert_eq!(response["service"], "folio-api");
    assert_eq!(response["database"], "ok");
    assert_eq!(response["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_survives_closed_database() {
    let app = test_app().await;
    app.state.database().pool().close().await;

    let (status, response) = get_json(app.router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "healthy");
    assert_eq!(response["database"], "unavailable");
}
