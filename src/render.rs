//! Output formats for site metadata consumers.
//!
//! - `to_json` / `to_toml`: the whole record, camelCase keys
//! - `head_tags`: `<title>`, description and Open Graph tags
//! - `nav_html`: navigation menu fragment in declaration order

use crate::metadata::SiteMetadata;
use anyhow::Result;

pub fn to_json(meta: &SiteMetadata) -> Result<String> {
    Ok(serde_json::to_string_pretty(meta)?)
}

pub fn to_toml(meta: &SiteMetadata) -> Result<String> {
    Ok(toml::to_string_pretty(meta)?)
}

/// Tags for the document `<head>`.
pub fn head_tags(meta: &SiteMetadata) -> String {
    let title = escape_xml(meta.site_title());
    let description = escape_xml(meta.description());
    let url = escape_xml(meta.site_url());
    let logo = escape_xml(meta.logo());

    let mut html = String::new();
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str(&format!("<meta name=\"description\" content=\"{description}\">\n"));
    html.push_str(&format!("<meta property=\"og:title\" content=\"{title}\">\n"));
    html.push_str(&format!("<meta property=\"og:description\" content=\"{description}\">\n"));
    html.push_str(&format!("<meta property=\"og:url\" content=\"{url}\">\n"));
    html.push_str(&format!("<meta property=\"og:image\" content=\"{logo}\">\n"));
    html.push_str(&format!("<link rel=\"icon\" href=\"{logo}\">\n"));
    html
}

/// Navigation menu as a `<nav>` list.
pub fn nav_html(meta: &SiteMetadata) -> String {
    let mut html = String::from("<nav>\n  <ul>\n");
    for link in meta.nav_links() {
        html.push_str(&format!(
            "    <li><a href=\"{}\">{}</a></li>\n",
            escape_xml(link.url()),
            escape_xml(link.name())
        ));
    }
    html.push_str("  </ul>\n</nav>\n");
    html
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
