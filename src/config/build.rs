//! `[build]` section configuration.

use serde::{Deserialize, Serialize};

/// `[build]` section in site.toml - deployment settings.
///
/// # Example
/// ```toml
/// [build]
/// base_path = "/running_page/"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Sub-path the site is deployed under.
    /// Overridden by `--base-path` and the `BASE_URL` environment variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_build_base_path() {
        let config: SiteConfig =
            toml::from_str("[build]\nbase_path = \"/running_page/\"").unwrap();
        assert_eq!(config.build.base_path.as_deref(), Some("/running_page/"));
    }

    #[test]
    fn test_build_base_path_default() {
        let config: SiteConfig = toml::from_str("[build]").unwrap();
        assert_eq!(config.build.base_path, None);
    }
}
