//! Sitemeta - site metadata provider for a running page website.
//!
//! ```ignore
//! use sitemeta::{SiteMetadata, init_metadata, metadata};
//!
//! init_metadata(SiteMetadata::new("/running_page/"))?;
//! let meta = metadata();
//! assert_eq!(meta.nav_links()[0].url(), "/running_page//summary");
//! ```

pub mod cli;
pub mod config;
pub mod init;
pub mod logger;
pub mod metadata;
pub mod paths;
pub mod render;

pub use config::{ConfigError, SiteConfig, init_metadata, metadata};
pub use metadata::{NavLink, SiteMetadata};
pub use paths::{BasePath, base_path_prefix};
