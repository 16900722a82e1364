//! Site configuration management for `site.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                       |
//! |-------------|-----------------------------------------------|
//! | `[site]`    | Title, canonical url, description, logo       |
//! | `[build]`   | Deployment base path                          |
//! | `[[nav]]`   | Ordered navigation links                      |
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Yichao Running Page"
//! url = "https://wayichao.github.io/"
//!
//! [build]
//! base_path = "/running_page/"
//!
//! [[nav]]
//! name = "Summary"
//! path = "/summary"
//! ```
//!
//! The file is optional: without it every value falls back to the built-in
//! running page data.

mod build;
pub mod defaults;
mod error;
pub mod handle;
mod nav;
mod site;

pub use build::BuildConfig;
pub use error::ConfigError;
pub use handle::{init_metadata, metadata};
pub use nav::{NavEntry, NavTarget};
pub use site::SiteSection;

use crate::cli::Cli;
use crate::paths::BasePath;
use anyhow::Result;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use url::Url;

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Base path resolved from CLI, environment and `[build]` (set after loading)
    #[serde(skip, default = "defaults::build::base_path")]
    #[educe(Default = defaults::build::base_path())]
    pub base_path: String,

    /// Descriptive site fields
    #[serde(default)]
    pub site: SiteSection,

    /// Deployment settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Navigation links, in display order
    #[serde(default = "defaults::nav::entries")]
    #[educe(Default = defaults::nav::entries())]
    pub nav: Vec<NavEntry>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Load `site.toml` if present and resolve the base path once.
    ///
    /// The base path comes from, in order: `--base-path`, the `BASE_URL`
    /// environment variable, `[build].base_path`, then `/`.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = if cli.config.exists() {
            Self::from_path(&cli.config)?
        } else {
            Self::default()
        };
        config.config_path = cli.config.clone();

        let env_base = env::var(defaults::build::BASE_PATH_ENV).ok();
        config.base_path = resolve_base_path(
            cli.base_path.as_deref(),
            env_base.as_deref(),
            config.build.base_path.as_deref(),
        )
        .to_owned();

        Ok(config)
    }

    /// Whether the config file this value was loaded from exists on disk.
    pub fn file_exists(&self) -> bool {
        self.config_path.is_file()
    }

    /// Resolver for links under the resolved base path.
    #[inline]
    pub fn base(&self) -> BasePath<'_> {
        BasePath::new(&self.base_path)
    }

    /// Validate field contents.
    ///
    /// The logo is deliberately left unchecked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation("[site.title] must not be empty".into()));
        }

        if !is_absolute_http_url(&self.site.url) {
            return Err(ConfigError::Validation(format!(
                "[site.url] must be an absolute http(s) URL, got `{}`",
                self.site.url
            )));
        }

        for entry in &self.nav {
            match entry.target()? {
                NavTarget::Url(url) if Url::parse(url).is_err() => {
                    return Err(ConfigError::Validation(format!(
                        "[[nav]] `{}` has an invalid url `{url}`",
                        entry.name
                    )));
                }
                NavTarget::Path("") => {
                    return Err(ConfigError::Validation(format!(
                        "[[nav]] `{}` has an empty path",
                        entry.name
                    )));
                }
                _ => {}
            }
        }

        Ok(())
    }
}

/// Pick the first base path that is set.
pub fn resolve_base_path<'a>(
    cli: Option<&'a str>,
    env: Option<&'a str>,
    file: Option<&'a str>,
) -> &'a str {
    cli.or(env).or(file).unwrap_or("/")
}

fn is_absolute_http_url(s: &str) -> bool {
    Url::parse(s).is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn parse(content: &str) -> SiteConfig {
        SiteConfig::from_str(content).unwrap()
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.base_path, "/");
        assert_eq!(config.site.title, "Yichao Running Page");
        assert_eq!(config.build.base_path, None);
        assert_eq!(config.nav.len(), 3);
    }

    #[test]
    fn test_from_str_sets_resolved_base_path_default() {
        let config = parse("[build]\nbase_path = \"/running_page/\"");
        // Only `load` resolves; a bare parse stays at the root
        assert_eq!(config.base_path, "/");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[site\ntitle = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SiteConfig::from_path(Path::new("/definitely/not/here/site.toml")).unwrap_err();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[site]\ntitle = \"From Disk\"").unwrap();

        let config = SiteConfig::from_path(file.path()).unwrap();
        assert_eq!(config.site.title, "From Disk");
        assert_eq!(config.config_path, file.path());
        assert!(config.file_exists());
    }

    #[test]
    fn test_resolve_base_path_precedence() {
        assert_eq!(resolve_base_path(Some("/cli/"), Some("/env/"), Some("/file/")), "/cli/");
        assert_eq!(resolve_base_path(None, Some("/env/"), Some("/file/")), "/env/");
        assert_eq!(resolve_base_path(None, None, Some("/file/")), "/file/");
        assert_eq!(resolve_base_path(None, None, None), "/");
    }

    #[test]
    fn test_resolve_base_path_keeps_empty() {
        assert_eq!(resolve_base_path(None, Some(""), Some("/file/")), "");
    }

    #[test]
    fn test_load_with_cli_base_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "[build]\nbase_path = \"/from_file/\"").unwrap();

        let cli = Cli::parse_from([
            "sitemeta",
            "-C",
            path.to_str().unwrap(),
            "--base-path",
            "/running_page/",
            "show",
        ]);
        let config = SiteConfig::load(&cli).unwrap();

        assert_eq!(config.base_path, "/running_page/");
        assert_eq!(config.config_path, path);
    }

    #[test]
    fn test_load_without_file_uses_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let cli = Cli::parse_from(["sitemeta", "-C", path.to_str().unwrap(), "--base-path", "/", "show"]);
        let config = SiteConfig::load(&cli).unwrap();

        assert!(!config.file_exists());
        assert_eq!(config.site.title, "Yichao Running Page");
        assert_eq!(config.base_path, "/");
    }

    #[test]
    fn test_validate_builtin() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_title() {
        let err = parse("[site]\ntitle = \"  \"").validate().unwrap_err();
        assert!(err.to_string().contains("[site.title]"));
    }

    #[test]
    fn test_validate_relative_site_url() {
        let err = parse("[site]\nurl = \"wayichao.github.io\"").validate().unwrap_err();
        assert!(err.to_string().contains("[site.url]"));
    }

    #[test]
    fn test_validate_non_http_site_url() {
        let err = parse("[site]\nurl = \"ftp://wayichao.github.io/\"").validate().unwrap_err();
        assert!(err.to_string().contains("[site.url]"));
    }

    #[test]
    fn test_validate_logo_is_not_checked() {
        assert!(parse("[site]\nlogo = \"not a url at all\"").validate().is_ok());
    }

    #[test]
    fn test_validate_bad_nav_url() {
        let config = parse("[[nav]]\nname = \"Blog\"\nurl = \"/not/absolute\"");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("`Blog` has an invalid url"));
    }

    #[test]
    fn test_validate_empty_nav_path() {
        let config = parse("[[nav]]\nname = \"Summary\"\npath = \"\"");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("empty path"));
    }

    #[test]
    fn test_validate_nav_without_target() {
        let config = parse("[[nav]]\nname = \"Nowhere\"");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_nav_list() {
        assert!(parse("nav = []").validate().is_ok());
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let result = SiteConfig::from_str("[unknown_section]\nfield = \"value\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_round_trip_keeps_nav_targets() {
        let content = toml::to_string_pretty(&SiteConfig::default()).unwrap();
        let config = parse(&content);

        assert_eq!(config.nav, defaults::nav::entries());
        assert!(!content.contains("base_path"));
    }
}
