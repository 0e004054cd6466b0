//! Blog endpoints.

use crate::routes::pages::render_page;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use shared::content::ContentError;
use shared::models::{BlogPageData, PageData};

/// Creates the blog routes.
pub fn blog_routes(state: AppState) -> Router {
    Router::new()
        .route("/blog", get(list_posts))
        .route("/blog/{slug}", get(show_post))
        .with_state(state)
}

/// Blog index handler.
///
/// A posts directory that cannot be read renders an empty index.
async fn list_posts(State(state): State<AppState>, uri: Uri) -> Response {
    let posts = state.blog().load_posts().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "load blog posts");
        Vec::new()
    });

    let data = BlogPageData {
        page: PageData::new(state.hostname(), "blog"),
        posts,
        post: None,
    };
    render_page(&state, "blog", &uri, &data)
}

async fn show_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    uri: Uri,
) -> Response {
    let post = match state.blog().load_post(&slug) {
        Ok(post) => post,
        Err(ContentError::InvalidSlug(_)) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::warn!(slug = %slug, error = %e, "load blog post");
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    let data = BlogPageData {
        page: PageData::new(state.hostname(), "blog"),
        posts: Vec::new(),
        post: Some(post),
    };
    render_page(&state, "blog_post", &uri, &data)
}
