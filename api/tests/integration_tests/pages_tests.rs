//! Integration tests for the rendered site pages and static files.

use axum::http::StatusCode;

use super::common::{get_text, test_app};

#[tokio::test]
async fn test_home_page() {
    let app = test_app().await;

    let (status, content_type, body) = get_text(app.router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"));
    assert!(body.contains("Jacob LeCoq"));
    assert!(body.contains("test.example"));
}

#[tokio::test]
async fn test_resume_page() {
    let app = test_app().await;

    let (status, _, body) = get_text(app.router, "/resume").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Resume"));
    assert!(body.contains("Experience"));
}

#[tokio::test]
async fn test_showcase_lists_configured_account() {
    let app = test_app().await;

    let (status, _, body) = get_text(app.router, "/projects").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Projects"));
    assert!(body.contains("https://github.com/octo/folio"));
    assert!(body.contains("dotfiles"));
    assert!(body.contains("No description"));
}

#[tokio::test]
async fn test_dev_viewer_page() {
    let app = test_app().await;

    let (status, _, body) = get_text(app.router, "/dev").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("EventSource"));
    assert!(body.contains("/dev/logs"));
}

#[tokio::test]
async fn test_static_files_are_served() {
    let app = test_app().await;

    let (status, content_type, body) = get_text(app.router.clone(), "/static/script.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().contains("javascript"));
    assert!(body.contains("loadProjects"));

    let (status, _, _) = get_text(app.router, "/static/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route() {
    let app = test_app().await;

    let (status, _, _) = get_text(app.router, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Collects site-relative `href` targets from a rendered page.
fn internal_links(html: &str) -> Vec<String> {
    html.split("href=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .filter(|href| href.starts_with('/') && !href.starts_with("//"))
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_header_links_resolve() {
    let app = test_app().await;

    let (_, _, home) = get_text(app.router.clone(), "/").await;
    let links = internal_links(&home);
    for expected in ["/resume/", "/projects/", "/blog/", "/static/style.css"] {
        assert!(links.iter().any(|l| l == expected), "missing {expected} in {links:?}");
    }

    for link in links {
        let (status, _, _) = get_text(app.router.clone(), &link).await;
        assert_eq!(status, StatusCode::OK, "GET {link}");
    }
}

#[tokio::test]
async fn test_trailing_slash_reaches_route() {
    let app = test_app().await;

    let (status, _, body) = get_text(app.router, "/resume/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Experience"));
}
