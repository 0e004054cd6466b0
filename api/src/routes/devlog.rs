//! Live server log viewer.
//!
//! - GET /dev - viewer page
//! - GET /dev/logs - SSE stream of log lines
//!
//! Each stream owns one subscription on the broadcaster. The subscription is
//! closed when the stream ends, which happens when the client goes away (the
//! response body is dropped) or when the server starts shutting down.

use std::convert::Infallible;

use crate::routes::pages::render_page;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, Uri},
    response::{
        sse::{Event, Sse},
        IntoResponse, Response,
    },
    routing::get,
    Router,
};
use futures::stream::{self, Stream, StreamExt};
use shared::devlog::{Subscription, CONNECTED_SENTINEL};
use shared::models::PageData;
use tokio_util::sync::CancellationToken;

/// Creates the log viewer routes.
pub fn devlog_routes(state: AppState) -> Router {
    Router::new()
        .route("/dev", get(viewer_page))
        .route("/dev/logs", get(stream_logs))
        .with_state(state)
}

async fn viewer_page(State(state): State<AppState>, uri: Uri) -> Response {
    let data = PageData::new(state.hostname(), "dev");
    render_page(&state, "devlogs", &uri, &data)
}

/// GET /dev/logs - stream log lines to the browser.
async fn stream_logs(State(state): State<AppState>) -> impl IntoResponse {
    let subscription = state.broadcaster().subscribe();
    let stream = log_events(subscription, state.shutdown_token().clone());

    (
        [
            (header::CACHE_CONTROL, "no-cache"),
            (header::CONNECTION, "keep-alive"),
        ],
        Sse::new(stream),
    )
}

/// Turns a subscription into SSE events, starting with the connect sentinel.
pub(crate) fn log_events(
    subscription: Subscription,
    shutdown: CancellationToken,
) -> impl Stream<Item = Result<Event, Infallible>> {
    let connected = stream::once(async { Ok(Event::default().data(CONNECTED_SENTINEL)) });

    let lines = stream::unfold(
        (subscription, shutdown),
        |(mut subscription, shutdown)| async move {
            tokio::select! {
                line = subscription.recv() => {
                    line.map(|line| (Ok(Event::default().data(line)), (subscription, shutdown)))
                }
                () = shutdown.cancelled() => None,
            }
        },
    );

    connected.chain(lines)
}
