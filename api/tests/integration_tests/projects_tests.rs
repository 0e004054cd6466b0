//! Integration tests for the project listing API.

use axum::http::StatusCode;

use super::common::{get_json, test_app, KNOWN_USER, MALFORMED_USER};

#[tokio::test]
async fn test_list_projects() {
    let app = test_app().await;

    let (status, response) = get_json(app.router, &format!("/api/projects?username={KNOWN_USER}")).await;
    assert_eq!(status, StatusCode::OK);

    let projects = response.as_array().unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0]["name"], "folio");
    assert_eq!(projects[0]["html_url"], "https://github.com/octo/folio");
    assert_eq!(projects[0]["stargazers_count"], 42);
    assert_eq!(projects[0]["forks_count"], 3);
    assert!(projects[1]["description"].is_null());
}

#[tokio::test]
async fn test_missing_username_is_bad_request() {
    let app = test_app().await;

    let (status, response) = get_json(app.router.clone(), "/api/projects").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "invalid_request");
    assert_eq!(response["message"], "username required");

    let (status, _) = get_json(app.router, "/api/projects?username=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_user_is_fetch_failure() {
    let app = test_app().await;

    let (status, response) = get_json(app.router, "/api/projects?username=ghost").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["message"], "Failed to fetch repos");
}

#[tokio::test]
async fn test_malformed_listing_is_parse_failure() {
    let app = test_app().await;

    let (status, response) =
        get_json(app.router, &format!("/api/projects?username={MALFORMED_USER}")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response["error"], "parse_failed");
    assert_eq!(response["message"], "Failed to parse repos");
}
