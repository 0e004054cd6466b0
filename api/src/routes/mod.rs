//! API route definitions.
//!
//! This module organizes all HTTP routes for the Folio server.

mod blog;
mod devlog;
mod health;
mod pages;
mod projects;

pub use blog::blog_routes;
pub use devlog::devlog_routes;
pub use health::health_routes;
pub use pages::page_routes;
pub use projects::project_routes;
