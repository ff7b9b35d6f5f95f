//! File-backed template engine.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for template rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template {template:?} not found")]
    NotFound { template: String },

    #[error("failed to read template {template:?}: {source}")]
    Io {
        template: String,
        source: std::io::Error,
    },

    #[error("unclosed placeholder in template {template:?}")]
    Unclosed { template: String },
}

/// Renders templates from a directory on disk.
///
/// Shared across request handlers via `Arc`; holds no mutable state.
#[derive(Debug)]
pub struct Templates {
    root: PathBuf,
}

impl Templates {
    /// Create an engine rooted at the given template directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The template directory this engine reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Render a template with the given variables.
    ///
    /// The file is read on every call, so edits to templates show up without
    /// a restart. Template names are relative paths; anything trying to
    /// climb out of the root is treated as not found.
    pub async fn render(
        &self,
        template: &str,
        vars: &HashMap<&str, &str>,
    ) -> Result<String, RenderError> {
        if !is_safe_name(template) {
            return Err(RenderError::NotFound {
                template: template.to_string(),
            });
        }

        let path = self.root.join(template);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                return Err(RenderError::NotFound {
                    template: template.to_string(),
                });
            }
            Err(source) => {
                return Err(RenderError::Io {
                    template: template.to_string(),
                    source,
                });
            }
        };

        substitute(&raw, vars).ok_or_else(|| RenderError::Unclosed {
            template: template.to_string(),
        })
    }
}

fn is_safe_name(template: &str) -> bool {
    !template.is_empty()
        && !template.starts_with('/')
        && template.split('/').all(|seg| !seg.is_empty() && seg != "..")
}

/// Replace each `{{ name }}` placeholder with its value from `vars`.
///
/// Names are trimmed of surrounding whitespace; unknown names become the
/// empty string. Returns `None` on an unterminated `{{`.
fn substitute(raw: &str, vars: &HashMap<&str, &str>) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        let close = after_open.find("}}")?;

        let name = after_open[..close].trim();
        if let Some(value) = vars.get(name) {
            out.push_str(value);
        }

        rest = &after_open[close + 2..];
    }

    out.push_str(rest);
    Some(out)
}
