//! Folio Shared Library
//!
//! This crate contains the types and services shared by the Folio server and
//! the static-site generator.
//!
//! # Modules
//!
//! - [`models`] - Data handed to page templates
//! - [`devlog`] - Live fan-out of log lines to browser viewers
//! - [`content`] - Blog posts from markdown files with YAML frontmatter
//! - [`render`] - Handlebars page rendering
//! - [`github`] - Repository listings from the GitHub API
//!
//! # Example
//!
//! ```
//! use shared::content::parse_post;
//!
//! let post = parse_post("---\ntitle: Hello\npublished: true\n---\nHi *there*").unwrap();
//! assert_eq!(post.title, "Hello");
//! assert!(post.content.contains("<em>there</em>"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod content;
pub mod devlog;
pub mod github;
pub mod models;
pub mod render;

/// Re-export common dependencies for convenience.
pub use chrono;
pub use serde;
pub use serde_json;
