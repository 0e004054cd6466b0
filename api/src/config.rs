//! Server configuration module.
//!
//! Handles loading configuration from environment variables with sensible defaults.

use anyhow::{bail, Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_HOSTNAME: &str = "localhost";
const DEFAULT_DB_PATH: &str = "db.sqlite3";
const DEFAULT_GITHUB_USER: &str = "HexSleeves";

/// Console log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unknown log format {other:?} (expected \"text\" or \"json\")"),
        }
    }
}

/// Server configuration.
///
/// Configuration values can be set via environment variables:
/// - `FOLIO_HOST`: The host address to bind to (default: "0.0.0.0")
/// - `FOLIO_PORT`: The port to listen on (default: 8000)
/// - `FOLIO_HOSTNAME`: Public host name shown on pages (default: "localhost")
/// - `FOLIO_DB_PATH`: SQLite database file (default: "db.sqlite3")
/// - `FOLIO_SITE_DIR`: Directory holding `templates/`, `static/` and `posts/`
///   (default: the `site/` directory of this repository)
/// - `FOLIO_GITHUB_USER`: Account whose repositories fill the showcase (default: "HexSleeves")
/// - `FOLIO_GITHUB_API_URL`: GitHub API base URL (default: <https://api.github.com>)
/// - `FOLIO_LOG_FORMAT`: "text" or "json" (default: "text")
#[derive(Debug, Clone)]
pub struct Config {
    /// The host address to bind to.
    pub host: String,
    /// The port to listen on.
    pub port: u16,
    /// Public host name passed to templates.
    pub hostname: String,
    /// Path of the SQLite database file.
    pub db_path: PathBuf,
    /// Root of the site content.
    pub site_dir: PathBuf,
    /// GitHub account shown on the showcase page.
    pub github_user: String,
    /// GitHub API base URL.
    pub github_api_url: String,
    /// Console log output format.
    pub log_format: LogFormat,
}

impl Config {
    /// Creates a new configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `FOLIO_PORT` is set but cannot be parsed as a valid port number
    /// - `FOLIO_LOG_FORMAT` is set to an unknown format
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates a configuration reading each variable through `lookup`.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = lookup("FOLIO_PORT")
            .map(|p| p.parse::<u16>())
            .transpose()
            .context("FOLIO_PORT must be a port number")?
            .unwrap_or(defaults.port);

        let log_format = lookup("FOLIO_LOG_FORMAT")
            .map(|f| f.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            host: lookup("FOLIO_HOST").unwrap_or(defaults.host),
            port,
            hostname: lookup("FOLIO_HOSTNAME").unwrap_or(defaults.hostname),
            db_path: lookup("FOLIO_DB_PATH").map_or(defaults.db_path, PathBuf::from),
            site_dir: lookup("FOLIO_SITE_DIR").map_or(defaults.site_dir, PathBuf::from),
            github_user: lookup("FOLIO_GITHUB_USER").unwrap_or(defaults.github_user),
            github_api_url: lookup("FOLIO_GITHUB_API_URL").unwrap_or(defaults.github_api_url),
            log_format,
        })
    }

    /// Returns the socket address for binding.
    ///
    /// # Errors
    ///
    /// Returns an error if the host and port do not form a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }

    /// Directory of page templates.
    #[must_use]
    pub fn templates_dir(&self) -> PathBuf {
        self.site_dir.join("templates")
    }

    /// Directory served under `/static`.
    #[must_use]
    pub fn static_dir(&self) -> PathBuf {
        self.site_dir.join("static")
    }

    /// Directory of markdown blog posts.
    #[must_use]
    pub fn posts_dir(&self) -> PathBuf {
        self.site_dir.join("posts")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            hostname: DEFAULT_HOSTNAME.to_string(),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            site_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../site")),
            github_user: DEFAULT_GITHUB_USER.to_string(),
            github_api_url: shared::github::DEFAULT_API_URL.to_string(),
            log_format: LogFormat::Text,
        }
    }
}
