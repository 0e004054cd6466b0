//! Site page endpoints.
//!
//! Renders the home, resume and project showcase pages.

use crate::state::AppState;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use shared::models::PageData;

/// Creates the page routes.
pub fn page_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/resume", get(resume))
        .route("/projects", get(showcase))
        .with_state(state)
}

/// Renders `template` as an HTML response.
///
/// Render failures are logged and answered with a plain 500.
pub(crate) fn render_page<T: Serialize>(
    state: &AppState,
    template: &str,
    uri: &Uri,
    data: &T,
) -> Response {
    match state.renderer().render(template, data) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::warn!(url = %uri.path(), error = %e, "render template");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

async fn home(State(state): State<AppState>, uri: Uri) -> Response {
    let data = PageData::new(state.hostname(), "home");
    render_page(&state, "home", &uri, &data)
}

async fn resume(State(state): State<AppState>, uri: Uri) -> Response {
    let data = PageData::new(state.hostname(), "resume");
    render_page(&state, "resume", &uri, &data)
}

/// Showcase handler.
///
/// Projects are fetched on every request; a failed fetch renders the page
/// without projects.
async fn showcase(State(state): State<AppState>, uri: Uri) -> Response {
    let projects = state.feed().fetch_or_empty(state.github_user()).await;
    let data = PageData::new(state.hostname(), "showcase").with_projects(projects);
    render_page(&state, "showcase", &uri, &data)
}
