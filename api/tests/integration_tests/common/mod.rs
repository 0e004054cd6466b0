//! Common test utilities and helpers for integration tests.
//!
//! This module provides shared functionality used across all integration tests,
//! including test app setup, a fake GitHub API and HTTP request helpers.

use api::{create_app, App, AppState, Config};
use axum::body::Body;
use axum::extract::Path;
use axum::http::{header, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use shared::devlog::Broadcaster;
use tempfile::TempDir;

/// GitHub account the fake API knows repositories for.
pub const KNOWN_USER: &str = "octo";

/// GitHub account for which the fake API answers with a non-list body.
pub const MALFORMED_USER: &str = "weird";

/// The served app plus everything that must outlive it.
pub struct TestApp {
    pub router: App,
    pub state: AppState,
    _dir: TempDir,
}

/// Creates a test app with a fresh database and a fake GitHub API.
///
/// The showcase account is [`KNOWN_USER`].
pub async fn test_app() -> TestApp {
    let github = spawn_fake_github().await;
    let dir = tempfile::tempdir().unwrap();

    let config = Config {
        db_path: dir.path().join("test.sqlite3"),
        hostname: "test.example".to_string(),
        github_user: KNOWN_USER.to_string(),
        github_api_url: github,
        ..Config::default()
    };
    let state = AppState::from_config(&config, Broadcaster::new())
        .await
        .unwrap();

    TestApp {
        router: create_app(state.clone()),
        state,
        _dir: dir,
    }
}

/// Starts a local server answering `/users/{user}/repos` like GitHub does.
async fn spawn_fake_github() -> String {
    async fn repos(Path(user): Path<String>) -> Response {
        match user.as_str() {
            KNOWN_USER => Json(json!([
                {
                    "name": "folio",
                    "description": "Portfolio site",
                    "html_url": "https://github.com/octo/folio",
                    "language": "Rust",
                    "stargazers_count": 42,
                    "forks_count": 3,
                    "updated_at": "2025-01-01T00:00:00Z"
                },
                {
                    "name": "dotfiles",
                    "description": null,
                    "html_url": "https://github.com/octo/dotfiles",
                    "language": null,
                    "stargazers_count": 1,
                    "forks_count": 0
                }
            ]))
            .into_response(),
            MALFORMED_USER => Json(json!({ "message": "not a list" })).into_response(),
            _ => (StatusCode::NOT_FOUND, Json(json!({ "message": "Not Found" }))).into_response(),
        }
    }

    let router = Router::new().route("/users/{user}/repos", routing::get(repos));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Sends a GET request and returns the raw response.
pub async fn request(app: App, uri: &str) -> Response {
    tower::ServiceExt::oneshot(
        app,
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Helper to make a GET request and read the body as text.
pub async fn get_text(app: App, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = request(app, uri).await;

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(body_bytes.to_vec()).unwrap();

    (status, content_type, body)
}

/// Helper to make a GET request and parse the body as JSON.
pub async fn get_json(app: App, uri: &str) -> (StatusCode, Value) {
    let response = request(app, uri).await;

    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    (status, json)
}
