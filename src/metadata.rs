//! Site metadata consumed by the page-rendering layer.
//!
//! `SiteMetadata` is built once at startup, from either the built-in running
//! page data or a loaded `site.toml`, and is read-only afterwards.
//!
//! ```text
//! SiteConfig + base path ──► SiteMetadata::from_config() ──┐
//!                base path ──► SiteMetadata::new() ────────┤
//!                                                          ▼
//!                                                   init_metadata()
//! ```

use crate::{
    config::{ConfigError, NavTarget, SiteConfig, defaults},
    paths::BasePath,
};
use serde::Serialize;

/// A navigation menu entry: display name and target URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    name: String,
    url: String,
}

impl NavLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute external URL, or a path already resolved against the base path.
    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Descriptive record of the site.
///
/// Serializes with camelCase keys (`siteTitle`, `siteUrl`, `navLinks`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadata {
    site_title: String,
    site_url: String,
    description: String,
    logo: String,
    nav_links: Vec<NavLink>,
}

impl SiteMetadata {
    /// Built-in running page metadata, with the Summary link under `base_path`.
    pub fn new(base_path: &str) -> Self {
        let base = BasePath::new(base_path);
        Self {
            site_title: defaults::site::title(),
            site_url: defaults::site::url(),
            description: defaults::site::description(),
            logo: defaults::site::logo(),
            nav_links: vec![
                NavLink::new("Summary", base.link("/summary")),
                NavLink::new("yihong's Blog", "https://github.com/yihong0618/gitblog"),
                NavLink::new(
                    "About to README-CN",
                    "https://github.com/yihong0618/running_page/blob/master/README-CN.md",
                ),
            ],
        }
    }

    /// Build metadata from a loaded config, resolving `path` links against
    /// `config.base_path`.
    ///
    /// The config is validated first, so a published value always has a
    /// non-empty title and an absolute site url.
    pub fn from_config(config: &SiteConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let base = config.base();
        let nav_links = config
            .nav
            .iter()
            .map(|entry| {
                let url = match entry.target()? {
                    NavTarget::Url(url) => url.to_owned(),
                    NavTarget::Path(path) => base.link(path),
                };
                Ok(NavLink::new(entry.name.as_str(), url))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self {
            site_title: config.site.title.clone(),
            site_url: config.site.url.clone(),
            description: config.site.description.clone(),
            logo: config.site.logo.clone(),
            nav_links,
        })
    }

    #[inline]
    pub fn site_title(&self) -> &str {
        &self.site_title
    }

    #[inline]
    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn logo(&self) -> &str {
        &self.logo
    }

    /// Navigation links in display order.
    #[inline]
    pub fn nav_links(&self) -> &[NavLink] {
        &self.nav_links
    }

    /// Look up a nav link by display name (first match).
    pub fn nav_link(&self, name: &str) -> Option<&NavLink> {
        self.nav_links.iter().find(|link| link.name == name)
    }
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self::new("/")
    }
}
