//! Project listing API.
//!
//! Proxies the GitHub repository listing for any account so the showcase page
//! can load projects for a visitor-supplied user name.

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use shared::github::FeedError;
use shared::models::Project;
use validator::Validate;

/// Query parameters for the project listing.
#[derive(Debug, Deserialize, Validate)]
pub struct ProjectsQuery {
    /// GitHub account name.
    #[serde(default)]
    #[validate(length(min = 1, max = 39, message = "username required"))]
    pub username: String,
}

/// Error response for the project listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectsError {
    /// Error type.
    pub error: String,
    /// Detailed error message.
    pub message: String,
}

impl ProjectsError {
    fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

/// Creates the project API routes.
pub fn project_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/projects", get(list_projects))
        .with_state(state)
}

/// Handler for the project listing.
///
/// Returns 400 without a valid `username`, 500 if GitHub cannot be reached or
/// answers with something other than a repository list.
async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectsQuery>,
) -> Result<Json<Vec<Project>>, (StatusCode, Json<ProjectsError>)> {
    if params.validate().is_err() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ProjectsError::new("invalid_request", "username required")),
        ));
    }

    let projects = state.feed().fetch(&params.username).await.map_err(|e| {
        tracing::warn!(username = %params.username, error = %e, "fetch github repos");
        let error = match e {
            FeedError::Decode(_) => ProjectsError::new("parse_failed", "Failed to parse repos"),
            FeedError::Url(_) | FeedError::Request(_) | FeedError::Status(_) => {
                ProjectsError::new("fetch_failed", "Failed to fetch repos")
            }
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(error))
    })?;

    Ok(Json(projects))
}
