//! Health probe for a running API server.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::time::Duration;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Body of the server's `/health` response.
#[derive(Debug, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    pub database: String,
}

/// Calls `GET {api_url}/health`.
///
/// # Errors
///
/// Returns an error if the server cannot be reached, answers with a non-2xx
/// status or with a body that is not a health report.
pub async fn check(api_url: &str) -> Result<HealthStatus> {
    let url = format!("{}/health", api_url.trim_end_matches('/'));
    let client = reqwest::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()
        .context("build HTTP client")?;

    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("request {url}"))?;
    if !response.status().is_success() {
        bail!("{url} returned {}", response.status());
    }

    response
        .json::<HealthStatus>()
        .await
        .context("decode health response")
}
