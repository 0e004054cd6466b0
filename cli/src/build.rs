//! Static site generation.
//!
//! Renders the site templates to plain HTML files so the portfolio can be
//! hosted without the API server (for example on GitHub Pages).

use anyhow::{Context, Result};
use shared::content::BlogSource;
use shared::github::ProjectFeed;
use shared::models::{BlogPageData, PageData};
use shared::render::Renderer;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Pages rendered by every build, as (template, output path).
const PAGES: [(&str, &str); 3] = [
    ("home", "index.html"),
    ("resume", "resume/index.html"),
    ("showcase", "projects/index.html"),
];

const BLOG_INDEX: &str = "blog/index.html";

const STATIC_OUT_DIR: &str = "static";

/// Inputs for one build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Output directory.
    pub out_dir: PathBuf,
    /// GitHub account whose repositories fill the showcase.
    pub github_user: String,
    /// URL prefix the site is served under.
    pub base_path: String,
    /// Host name passed to templates.
    pub hostname: String,
    /// Site root holding `templates/`, `static/` and `posts/`.
    pub site_dir: PathBuf,
    /// GitHub API base URL.
    pub api_url: String,
}

/// Strips trailing slashes so `{{base_path}}/x` never doubles them.
fn normalize_base_path(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}

/// Runs a full build, writing progress lines to `progress`.
///
/// # Errors
///
/// Returns an error if templates cannot be loaded, a page fails to render or
/// write, or the static files cannot be copied.
pub async fn run(options: &BuildOptions, progress: &mut impl Write) -> Result<()> {
    let base_path = normalize_base_path(&options.base_path);
    let out_dir = &options.out_dir;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir {}", out_dir.display()))?;

    let renderer = Renderer::from_dir(options.site_dir.join("templates"))
        .context("load templates")?;

    let feed = ProjectFeed::new(options.api_url.clone()).context("build GitHub client")?;
    let projects = feed.fetch_or_empty(&options.github_user).await;
    writeln!(progress, "Fetched {} projects from GitHub", projects.len())?;

    for (template, output) in PAGES {
        let data = PageData::new(options.hostname.as_str(), template)
            .with_base_path(base_path.as_str())
            .with_projects(projects.clone());
        let html = renderer
            .render(template, &data)
            .with_context(|| format!("render {template}"))?;
        write_page(out_dir, output, &html)?;
        writeln!(progress, "Generated {output}")?;
    }

    build_blog(options, &renderer, &base_path, progress)?;

    let static_dir = options.site_dir.join("static");
    copy_dir(&static_dir, &out_dir.join(STATIC_OUT_DIR))
        .with_context(|| format!("copy static files from {}", static_dir.display()))?;
    writeln!(progress, "Copied static files to {STATIC_OUT_DIR}")?;

    if !base_path.is_empty() {
        writeln!(progress, "\nBuilt with base path: {base_path}")?;
    }
    writeln!(progress, "Build complete!")?;
    Ok(())
}

/// Renders the blog index and one page per published post.
fn build_blog(
    options: &BuildOptions,
    renderer: &Renderer,
    base_path: &str,
    progress: &mut impl Write,
) -> Result<()> {
    let posts_dir = options.site_dir.join("posts");
    if !posts_dir.is_dir() {
        tracing::warn!(dir = %posts_dir.display(), "no posts directory, skipping blog");
        return Ok(());
    }

    let posts = BlogSource::new(posts_dir).load_posts().context("load posts")?;
    let page = PageData::new(options.hostname.as_str(), "blog").with_base_path(base_path);

    let index = BlogPageData {
        page: page.clone(),
        posts: posts.clone(),
        post: None,
    };
    let html = renderer.render("blog", &index).context("render blog")?;
    write_page(&options.out_dir, BLOG_INDEX, &html)?;
    writeln!(progress, "Generated {BLOG_INDEX}")?;

    for post in posts {
        let output = format!("blog/{}/index.html", post.slug);
        let data = BlogPageData {
            page: page.clone(),
            posts: Vec::new(),
            post: Some(post),
        };
        let html = renderer
            .render("blog_post", &data)
            .with_context(|| format!("render {output}"))?;
        write_page(&options.out_dir, &output, &html)?;
        writeln!(progress, "Generated {output}")?;
    }

    Ok(())
}

/// Writes `html` to `relative` under `out_dir`, creating parent directories.
fn write_page(out_dir: &Path, relative: &str, html: &str) -> Result<()> {
    let path = out_dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(&path, html).with_context(|| format!("write {}", path.display()))
}

/// Copies `src` into `dst` recursively. Symbolic links are skipped.
fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)?;

    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let file_type = entry.file_type();
        if file_type.is_symlink() {
            tracing::debug!(path = %entry.path().display(), "skipping symlink");
            continue;
        }

        let relative = entry.path().strip_prefix(src)?;
        let target = dst.join(relative);
        if file_type.is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)
                .with_context(|| format!("copy {}", entry.path().display()))?;
        }
    }

    Ok(())
}
