//! Blog post parsing and directory loading.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::markdown;
use crate::models::BlogPost;

const FRONTMATTER_DELIMITER: &str = "---";

/// Errors that can occur while loading blog content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Reading the posts directory or a post file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The frontmatter block is not valid YAML.
    #[error("Invalid frontmatter: {0}")]
    Frontmatter(#[from] serde_yaml::Error),

    /// The requested slug cannot name a post file.
    #[error("Invalid post slug: {0:?}")]
    InvalidSlug(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FrontMatter {
    title: String,
    date: String,
    description: String,
    tags: Vec<String>,
    published: bool,
}

/// Parses a post from its file contents.
///
/// The slug is left empty; [`BlogSource`] fills it from the file name.
///
/// # Errors
///
/// Returns [`ContentError::Frontmatter`] if the frontmatter is not valid YAML.
pub fn parse_post(text: &str) -> Result<BlogPost, ContentError> {
    let Some((frontmatter, body)) = split_frontmatter(text) else {
        return Ok(BlogPost {
            title: "Untitled".to_string(),
            content: markdown::render(text),
            ..BlogPost::default()
        });
    };

    let meta: FrontMatter = if frontmatter.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str(frontmatter)?
    };

    let parsed_date = NaiveDate::parse_from_str(meta.date.trim(), "%Y-%m-%d").ok();

    Ok(BlogPost {
        slug: String::new(),
        title: meta.title,
        date: meta.date,
        description: meta.description,
        tags: meta.tags,
        content: markdown::render(body),
        published: meta.published,
        parsed_date,
    })
}

fn split_frontmatter(text: &str) -> Option<(&str, &str)> {
    let mut parts = text.splitn(3, FRONTMATTER_DELIMITER);
    let preamble = parts.next()?;
    let frontmatter = parts.next()?;
    let body = parts.next()?;

    preamble.trim().is_empty().then_some((frontmatter, body))
}

/// A directory of markdown posts.
#[derive(Debug, Clone)]
pub struct BlogSource {
    dir: PathBuf,
}

impl BlogSource {
    /// Creates a source reading posts from `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the posts directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Loads all published posts, newest first.
    ///
    /// Posts that fail to load are logged and skipped. Posts without a
    /// parseable date sort last.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Io`] if the directory cannot be read.
    pub fn load_posts(&self) -> Result<Vec<BlogPost>, ContentError> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if entry.file_type()?.is_file() && name.ends_with(".md") {
                files.push(name);
            }
        }
        files.sort();

        let mut posts = Vec::new();
        for file in files {
            let post = match self.load_file(&file) {
                Ok(post) => post,
                Err(e) => {
                    tracing::warn!(file = %file, error = %e, "load blog post");
                    continue;
                }
            };

            tracing::info!(file = %file, published = post.published, "blog post");

            if post.published {
                posts.push(post);
            }
        }

        posts.sort_by(|a, b| b.parsed_date.cmp(&a.parsed_date));
        Ok(posts)
    }

    /// Loads a single post by slug, published or not.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidSlug`] for slugs that could escape the
    /// posts directory, or an I/O or frontmatter error if loading fails.
    pub fn load_post(&self, slug: &str) -> Result<BlogPost, ContentError> {
        if slug.is_empty() || slug.contains(['.', '/', '\\']) {
            return Err(ContentError::InvalidSlug(slug.to_string()));
        }
        self.load_file(&format!("{slug}.md"))
    }

    fn load_file(&self, file_name: &str) -> Result<BlogPost, ContentError> {
        let text = std::fs::read_to_string(self.dir.join(file_name))?;
        let mut post = parse_post(&text)?;
        post.slug = file_name
            .strip_suffix(".md")
            .unwrap_or(file_name)
            .to_string();
        Ok(post)
    }
}
