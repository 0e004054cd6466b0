//! Page template rendering.
//!
//! Templates are Handlebars files. Every `*.hbs` file directly inside the
//! templates directory becomes a template named by its file stem, and every
//! `*.hbs` file in `partials/` becomes a partial usable as `{{> name}}`.

use handlebars::Handlebars;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const TEMPLATE_EXTENSION: &str = "hbs";

/// Errors that can occur while loading or rendering templates.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The templates directory could not be read.
    #[error("Failed to read templates from {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A template failed to parse.
    #[error("Invalid template: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// Rendering a template failed, including unknown template names.
    #[error("Failed to render template: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Renders named page templates.
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    /// Loads all templates and partials from `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read or a template does
    /// not parse.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, RenderError> {
        let dir = dir.as_ref();
        let mut registry = Handlebars::new();

        for (name, path) in template_files(dir)? {
            registry
                .register_template_file(&name, &path)
                .map_err(Box::new)?;
            tracing::debug!(template = %name, "registered template");
        }

        let partials = dir.join("partials");
        if partials.is_dir() {
            for (name, path) in template_files(&partials)? {
                let source = std::fs::read_to_string(&path).map_err(|source| RenderError::Io {
                    path: path.clone(),
                    source,
                })?;
                registry
                    .register_partial(&name, source)
                    .map_err(Box::new)?;
                tracing::debug!(partial = %name, "registered partial");
            }
        }

        Ok(Self { registry })
    }

    /// Renders template `name` with `data`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Render`] if the template does not exist or
    /// fails to render.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        Ok(self.registry.render(name, data)?)
    }

    /// Returns whether a template or partial called `name` is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.registry.has_template(name)
    }
}

fn template_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, RenderError> {
    let io_error = |source| RenderError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION)
        {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            files.push((stem.to_string(), path.clone()));
        }
    }
    files.sort();
    Ok(files)
}
