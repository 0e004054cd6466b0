//! Folio API Server Binary
//!
//! Entry point for the Folio portfolio server.

#![deny(unsafe_code)]

use anyhow::Result;
use api::{Config, LogFormat};
use shared::devlog::{BroadcastLayer, Broadcaster};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Installed before anything logs so viewers see every record
    let broadcaster = Broadcaster::new();
    let json = config.log_format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .with(BroadcastLayer::new(broadcaster.clone()))
        .init();

    api::run_server_with_config(config, broadcaster).await
}
