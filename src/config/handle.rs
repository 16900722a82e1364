//! Process-wide read-only site metadata.
//!
//! The value is installed once at startup and never replaced:
//!
//! ```text
//! main ── SiteConfig::load() ── SiteMetadata ── init_metadata()
//!                                                     │
//!                              metadata() ◄───────────┘  (any caller, &'static)
//! ```
//!
//! Library users that never call [`init_metadata`] get the built-in data
//! deployed at the root on first read.

use super::error::ConfigError;
use crate::metadata::SiteMetadata;
use std::sync::OnceLock;

static METADATA: OnceLock<SiteMetadata> = OnceLock::new();

/// Install the site metadata. Fails if a value is already present.
pub fn init_metadata(meta: SiteMetadata) -> Result<&'static SiteMetadata, ConfigError> {
    let mut installed = false;
    let value = METADATA.get_or_init(|| {
        installed = true;
        meta
    });

    if installed {
        Ok(value)
    } else {
        Err(ConfigError::AlreadyInitialized)
    }
}

/// Get the installed site metadata.
#[inline]
pub fn metadata() -> &'static SiteMetadata {
    METADATA.get_or_init(|| SiteMetadata::new("/"))
}
