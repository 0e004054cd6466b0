//! Client for the GitHub repository listing API.

use reqwest::{header, Client, StatusCode, Url};
use std::time::Duration;
use thiserror::Error;

use crate::models::Project;

/// Public GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Number of repositories requested per account.
pub const PROJECTS_PER_PAGE: u32 = 12;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur while fetching projects.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The API base URL cannot be used to build a request URL.
    #[error("Invalid API URL: {0}")]
    Url(String),

    /// The request could not be sent or the response not received.
    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Unexpected status: {0}")]
    Status(StatusCode),

    /// The response body is not a list of repositories.
    #[error("Invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Fetches public repositories for an account.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ProjectFeed {
    client: Client,
    base_url: String,
}

impl ProjectFeed {
    /// Creates a feed against `base_url` (normally [`DEFAULT_API_URL`]).
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Request`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FeedError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(FeedError::Request)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Returns the repositories of `username`, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, GitHub answers with a
    /// non-success status, or the body cannot be decoded.
    pub async fn fetch(&self, username: &str) -> Result<Vec<Project>, FeedError> {
        let url = self.repos_url(username)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FeedError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }

        response.json().await.map_err(FeedError::Decode)
    }

    /// Like [`ProjectFeed::fetch`] but logs failures and returns no projects.
    pub async fn fetch_or_empty(&self, username: &str) -> Vec<Project> {
        match self.fetch(username).await {
            Ok(projects) => {
                tracing::info!(username, count = projects.len(), "fetched github projects");
                projects
            }
            Err(e) => {
                tracing::warn!(username, error = %e, "fetch github repos");
                Vec::new()
            }
        }
    }

    fn repos_url(&self, username: &str) -> Result<Url, FeedError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| FeedError::Url(format!("{}: {e}", self.base_url)))?;

        url.path_segments_mut()
            .map_err(|()| FeedError::Url(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["users", username, "repos"]);

        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &PROJECTS_PER_PAGE.to_string());

        Ok(url)
    }
}
