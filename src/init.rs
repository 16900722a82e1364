//! Starter config generation.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Write the built-in site data to `path` as TOML.
pub fn new_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "`{}` already exists. Use `sitemeta init --force` to overwrite it.",
            path.display()
        );
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
