//! Repository metadata shown on the project showcase.

use serde::{Deserialize, Serialize};

/// A public repository as reported by the GitHub REST API.
///
/// Field names follow the GitHub payload in both directions, so the JSON
/// served by `/api/projects` has the same shape the browser script expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Repository name.
    pub name: String,

    /// Repository description, if any.
    #[serde(default)]
    pub description: Option<String>,

    /// Link to the repository page.
    #[serde(rename = "html_url")]
    pub url: String,

    /// Primary language, if GitHub detected one.
    #[serde(default)]
    pub language: Option<String>,

    /// Star count.
    #[serde(rename = "stargazers_count", default)]
    pub stars: u64,

    /// Fork count.
    #[serde(rename = "forks_count", default)]
    pub forks: u64,

    /// Last update timestamp as sent by GitHub.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
