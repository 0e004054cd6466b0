//! Blog post model.

use chrono::NaiveDate;
use serde::Serialize;

/// A blog post loaded from a markdown file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    /// URL slug, taken from the file name without `.md`.
    pub slug: String,
    /// Post title.
    pub title: String,
    /// Publication date as written in the frontmatter.
    pub date: String,
    /// Short summary for listings.
    pub description: String,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Rendered HTML body.
    pub content: String,
    /// Whether the post is listed on the blog index.
    pub published: bool,
    /// `date` parsed as `YYYY-MM-DD`, when it parses.
    #[serde(skip)]
    pub parsed_date: Option<NaiveDate>,
}
