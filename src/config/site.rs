//! `[site]` section configuration.
//!
//! Contains the descriptive site fields: title, canonical url, description, logo.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in site.toml.
///
/// Every field falls back to the built-in running page data when omitted.
///
/// # Example
/// ```toml
/// [site]
/// title = "Yichao Running Page"
/// url = "https://wayichao.github.io/"
/// description = "This is a configable description"
/// logo = "https://example.com/logo.png"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    /// Site title for the browser tab and headers. Must be non-empty.
    #[serde(default = "defaults::site::title")]
    #[educe(Default = defaults::site::title())]
    pub title: String,

    /// Canonical absolute URL of the deployed site.
    #[serde(default = "defaults::site::url")]
    #[educe(Default = defaults::site::url())]
    pub url: String,

    /// Free-form description for meta tags.
    #[serde(default = "defaults::site::description")]
    #[educe(Default = defaults::site::description())]
    pub description: String,

    /// Image URL. Not checked for reachability or format.
    #[serde(default = "defaults::site::logo")]
    #[educe(Default = defaults::site::logo())]
    pub logo: String,
}
