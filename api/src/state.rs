//! Application state module.
//!
//! Defines the shared application state that is passed to route handlers.

use anyhow::{Context, Result};
use shared::content::BlogSource;
use shared::devlog::Broadcaster;
use shared::github::ProjectFeed;
use shared::render::Renderer;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::db::Database;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    renderer: Arc<Renderer>,
    blog: BlogSource,
    feed: ProjectFeed,
    database: Database,
    broadcaster: Broadcaster,
    shutdown: CancellationToken,
    hostname: Arc<str>,
    github_user: Arc<str>,
    static_dir: Arc<Path>,
}

impl AppState {
    /// Builds the state from configuration.
    ///
    /// Loads templates, opens and migrates the database, and prepares the
    /// GitHub client. `broadcaster` must be the one installed in the global
    /// tracing subscriber for `/dev/logs` to show server logs.
    ///
    /// # Errors
    ///
    /// Returns an error if templates fail to load or the database cannot be
    /// opened or migrated.
    pub async fn from_config(config: &Config, broadcaster: Broadcaster) -> Result<Self> {
        let renderer = Renderer::from_dir(config.templates_dir()).context("parse templates")?;

        let database = Database::open(&config.db_path).await?;
        database
            .run_migrations()
            .await
            .context("failed to run migrations")?;

        let feed = ProjectFeed::new(config.github_api_url.clone())
            .context("failed to build GitHub client")?;

        Ok(Self {
            renderer: Arc::new(renderer),
            blog: BlogSource::new(config.posts_dir()),
            feed,
            database,
            broadcaster,
            shutdown: CancellationToken::new(),
            hostname: config.hostname.as_str().into(),
            github_user: config.github_user.as_str().into(),
            static_dir: Arc::from(config.static_dir()),
        })
    }

    /// Returns the page renderer.
    #[must_use]
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Returns the blog content source.
    #[must_use]
    pub fn blog(&self) -> &BlogSource {
        &self.blog
    }

    /// Returns the GitHub project feed.
    #[must_use]
    pub fn feed(&self) -> &ProjectFeed {
        &self.feed
    }

    /// Returns the site database.
    #[must_use]
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Returns the live log broadcaster.
    #[must_use]
    pub fn broadcaster(&self) -> &Broadcaster {
        &self.broadcaster
    }

    /// Returns the token cancelled when the server shuts down.
    #[must_use]
    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.shutdown
    }

    /// Returns the public host name.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Returns the GitHub account shown on the showcase page.
    #[must_use]
    pub fn github_user(&self) -> &str {
        &self.github_user
    }

    /// Returns the directory served under `/static`.
    #[must_use]
    pub fn static_dir(&self) -> PathBuf {
        self.static_dir.to_path_buf()
    }
}
