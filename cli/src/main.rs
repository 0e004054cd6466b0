//! Folio CLI
//!
//! Builds the portfolio as a static site and probes a running server.
//!
//! # Usage
//!
//! ```bash
//! folio build --out dist --base /portfolio
//! folio health --api-url http://localhost:8000
//! ```

#![deny(unsafe_code)]

mod build;
mod health;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Folio CLI - static-site generator for the portfolio site
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the site to static HTML
    Build {
        /// Output directory
        #[arg(long, default_value = "dist")]
        out: PathBuf,

        /// GitHub username for projects
        #[arg(long, env = "FOLIO_GITHUB_USER", default_value = "HexSleeves")]
        github: String,

        /// Base path for URLs (e.g. /portfolio for GitHub Pages)
        #[arg(long, default_value = "")]
        base: String,

        /// Host name shown on pages
        #[arg(long, env = "FOLIO_HOSTNAME", default_value = "localhost")]
        hostname: String,

        /// Site directory holding templates/, static/ and posts/
        #[arg(long, env = "FOLIO_SITE_DIR", default_value = "site")]
        site_dir: PathBuf,

        /// GitHub API base URL
        #[arg(
            long,
            env = "FOLIO_GITHUB_API_URL",
            default_value = "https://api.github.com"
        )]
        api_url: String,
    },

    /// Check API server health
    Health {
        /// API server URL
        #[arg(
            short,
            long,
            env = "FOLIO_API_URL",
            default_value = "http://localhost:8000"
        )]
        api_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            out,
            github,
            base,
            hostname,
            site_dir,
            api_url,
        } => {
            let options = build::BuildOptions {
                out_dir: out,
                github_user: github,
                base_path: base,
                hostname,
                site_dir,
                api_url,
            };
            build::run(&options, &mut std::io::stdout().lock()).await?;
        }
        Commands::Health { api_url } => {
            println!("Checking health of Folio API at {api_url}...");
            let status = health::check(&api_url).await?;
            println!(
                "{} {} is {} (database: {})",
                status.service, status.version, status.status, status.database
            );
        }
    }

    Ok(())
}
