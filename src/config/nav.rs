//! `[[nav]]` entries configuration.
//!
//! Each entry points either at an absolute external `url`, used verbatim, or
//! at a `path` relative to the deployed site root, which is resolved against
//! the base path when metadata is built.
//!
//! # Example
//! ```toml
//! [[nav]]
//! name = "Summary"
//! path = "/summary"
//!
//! [[nav]]
//! name = "yihong's Blog"
//! url = "https://github.com/yihong0618/gitblog"
//! ```

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// One `[[nav]]` table. Exactly one of `url` / `path` must be set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavEntry {
    /// Display label.
    pub name: String,

    /// Absolute external URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Path relative to the base path, e.g. `/summary`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Where a nav entry points, borrowed from the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget<'a> {
    Url(&'a str),
    Path(&'a str),
}

impl NavEntry {
    pub fn url(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: Some(url.into()),
            path: None,
        }
    }

    pub fn path(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            path: Some(path.into()),
        }
    }

    /// Resolve which target this entry uses.
    pub fn target(&self) -> Result<NavTarget<'_>, ConfigError> {
        match (self.url.as_deref(), self.path.as_deref()) {
            (Some(url), None) => Ok(NavTarget::Url(url)),
            (None, Some(path)) => Ok(NavTarget::Path(path)),
            (Some(_), Some(_)) => Err(ConfigError::Validation(format!(
                "[[nav]] `{}` sets both `url` and `path`",
                self.name
            ))),
            (None, None) => Err(ConfigError::Validation(format!(
                "[[nav]] `{}` needs either `url` or `path`",
                self.name
            ))),
        }
    }
}
