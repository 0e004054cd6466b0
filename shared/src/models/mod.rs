//! Data models for the Folio site.
//!
//! This module contains the data structures handed to page templates.

pub mod blog;
pub mod page;
pub mod project;

pub use blog::BlogPost;
pub use page::{BlogPageData, PageData};
pub use project::Project;
