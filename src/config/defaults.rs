//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization, and by
//! [`SiteMetadata::new`](crate::metadata::SiteMetadata::new) for the built-in
//! site data.

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn title() -> String {
        "Yichao Running Page".into()
    }

    pub fn url() -> String {
        "https://wayichao.github.io/".into()
    }

    pub fn description() -> String {
        "This is a configable description".into()
    }

    pub fn logo() -> String {
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQTtc69JxHNcmN1ETpMUX4dozAgAN6iPjWalQ&usqp=CAU"
            .into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    /// Environment variable holding the deployment base path.
    pub const BASE_PATH_ENV: &str = "BASE_URL";

    /// Used when neither CLI, environment nor config file set a base path.
    pub fn base_path() -> String {
        "/".into()
    }
}

// ============================================================================
// [[nav]] Defaults
// ============================================================================

pub mod nav {
    use super::super::NavEntry;

    pub fn entries() -> Vec<NavEntry> {
        vec![
            NavEntry::path("Summary", "/summary"),
            NavEntry::url("yihong's Blog", "https://github.com/yihong0618/gitblog"),
            NavEntry::url(
                "About to README-CN",
                "https://github.com/yihong0618/running_page/blob/master/README-CN.md",
            ),
        ]
    }
}
