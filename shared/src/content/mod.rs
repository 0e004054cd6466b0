//! Blog content loading.
//!
//! Posts are markdown files with an optional YAML frontmatter block:
//!
//! ```text
//! ---
//! title: Hello
//! date: 2024-01-15
//! published: true
//! ---
//! Body in *markdown*.
//! ```

pub mod blog;
pub mod markdown;

pub use blog::{parse_post, BlogSource, ContentError};
