//! Template data for rendered pages.

use serde::Serialize;

use super::{BlogPost, Project};

/// Data available to every page template.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageData {
    /// Host name the site is served under.
    pub hostname: String,
    /// Navigation key of the current page (`home`, `resume`, ...).
    pub current_page: String,
    /// Prefix for every site-relative link. Empty when served from the root.
    pub base_path: String,
    /// Projects for the showcase page.
    pub projects: Vec<Project>,
}

impl PageData {
    /// Creates page data for the page identified by `current_page`.
    #[must_use]
    pub fn new(hostname: impl Into<String>, current_page: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            current_page: current_page.into(),
            ..Self::default()
        }
    }

    /// Sets the link prefix.
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Sets the showcase projects.
    #[must_use]
    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }
}

/// Data for the blog index and single-post pages.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BlogPageData {
    /// Common page data.
    #[serde(flatten)]
    pub page: PageData,
    /// Published posts, newest first.
    pub posts: Vec<BlogPost>,
    /// The post being viewed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<BlogPost>,
}
