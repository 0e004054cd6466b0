//! Integration tests for the live log stream.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, StatusCode};
use http_body_util::BodyExt;
use shared::devlog::BroadcastLayer;
use tokio_test::assert_pending;
use tracing_subscriber::layer::SubscriberExt;

use super::common::{request, test_app};

/// Reads the next body frame as text, failing if none arrives in time.
async fn next_frame(body: &mut Body) -> Option<String> {
    let frame = tokio::time::timeout(Duration::from_secs(2), body.frame())
        .await
        .expect("timed out waiting for frame")?
        .unwrap();
    let data = frame.into_data().unwrap();
    Some(String::from_utf8(data.to_vec()).unwrap())
}

#[tokio::test]
async fn test_stream_headers() {
    let app = test_app().await;

    let response = request(app.router, "/dev/logs").await;
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(headers[header::CONTENT_TYPE], "text/event-stream");
    assert_eq!(headers[header::CACHE_CONTROL], "no-cache");
    assert_eq!(headers[header::CONNECTION], "keep-alive");
}

#[tokio::test]
async fn test_stream_sends_sentinel_then_log_lines() {
    let app = test_app().await;

    let response = request(app.router, "/dev/logs").await;
    let mut body = response.into_body();

    assert_eq!(
        next_frame(&mut body).await.unwrap(),
        "data: [connected to log stream]\n\n"
    );

    // Nothing logged yet
    {
        let mut pending = tokio_test::task::spawn(body.frame());
        assert_pending!(pending.poll());
    }

    let subscriber =
        tracing_subscriber::registry().with(BroadcastLayer::new(app.state.broadcaster().clone()));
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(addr = ":8080", "starting server");
    });

    let frame = next_frame(&mut body).await.unwrap();
    assert!(frame.starts_with("data: "));
    assert!(
        frame.ends_with(" [INFO] starting server addr=:8080\n\n"),
        "unexpected frame {frame:?}"
    );
}

#[tokio::test]
async fn test_every_viewer_gets_every_line() {
    let app = test_app().await;

    let mut first = request(app.router.clone(), "/dev/logs").await.into_body();
    let mut second = request(app.router, "/dev/logs").await.into_body();
    assert_eq!(app.state.broadcaster().subscriber_count(), 2);

    next_frame(&mut first).await.unwrap();
    next_frame(&mut second).await.unwrap();

    app.state.broadcaster().broadcast("10:00:00 [WARN] one");
    app.state.broadcaster().broadcast("10:00:01 [WARN] two");

    for body in [&mut first, &mut second] {
        assert_eq!(next_frame(body).await.unwrap(), "data: 10:00:00 [WARN] one\n\n");
        assert_eq!(next_frame(body).await.unwrap(), "data: 10:00:01 [WARN] two\n\n");
    }
}

#[tokio::test]
async fn test_disconnect_unsubscribes() {
    let app = test_app().await;

    let mut body = request(app.router, "/dev/logs").await.into_body();
    next_frame(&mut body).await.unwrap();
    assert_eq!(app.state.broadcaster().subscriber_count(), 1);

    drop(body);
    assert_eq!(app.state.broadcaster().subscriber_count(), 0);

    // Broadcasting with no viewers is harmless
    app.state.broadcaster().broadcast("10:00:00 [INFO] nobody listening");
}

#[tokio::test]
async fn test_shutdown_ends_stream() {
    let app = test_app().await;

    let mut body = request(app.router, "/dev/logs").await.into_body();
    next_frame(&mut body).await.unwrap();

    app.state.shutdown_token().cancel();

    assert!(next_frame(&mut body).await.is_none());
    assert_eq!(app.state.broadcaster().subscriber_count(), 0);
}
