//! Integration tests for the Folio API.
//!
//! These tests drive the complete router, backed by the real site templates,
//! a temporary database and a local stand-in for the GitHub API.

mod common;

mod blog_tests;
mod devlog_tests;
mod health_tests;
mod pages_tests;
mod projects_tests;
