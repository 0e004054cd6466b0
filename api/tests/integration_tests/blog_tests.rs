//! Integration tests for the blog pages.
//!
//! These run against the posts shipped in `site/posts`.

use axum::http::StatusCode;

use super::common::{get_text, test_app};

#[tokio::test]
async fn test_blog_index_lists_published_posts() {
    let app = test_app().await;

    let (status, _, body) = get_text(app.router.clone(), "/blog").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Hello, World"));
    assert!(body.contains("href=\"/blog/hello-world/\""));
    assert!(!body.contains("Streaming server logs"));

    // The index links to the post as rendered
    let (status, _, post) = get_text(app.router, "/blog/hello-world/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(post.contains("<table>"));
}

#[tokio::test]
async fn test_blog_post_renders_markdown() {
    let app = test_app().await;

    let (status, _, body) = get_text(app.router, "/blog/hello-world").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1 id=\"hello-world\">Hello, World</h1>"));
    assert!(body.contains("<table>"));
    assert!(body.contains("target=\"_blank\""));
}

#[tokio::test]
async fn test_draft_is_viewable_by_slug() {
    let app = test_app().await;

    let (status, _, body) = get_text(app.router, "/blog/live-logs").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Streaming server logs to the browser"));
    assert!(body.contains("Draft"));
}

#[tokio::test]
async fn test_missing_post_is_not_found() {
    let app = test_app().await;

    let (status, _, _) = get_text(app.router, "/blog/no-such-post").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_traversal_slug_is_not_found() {
    let app = test_app().await;

    let (status, _, _) = get_text(app.router, "/blog/..%2Fsecret").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
