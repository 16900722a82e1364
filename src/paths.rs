//! Base path normalization for sub-path deployments.
//!
//! A site served from the domain root has base path `/`; a project site
//! (e.g. GitHub Pages) is served under something like `/running_page/`.
//! Internal links are written as `{prefix}/summary`, where the prefix is the
//! base path with the root case collapsed to the empty string.
//!
//! ```text
//! base path          prefix             link("/summary")
//! ─────────────────  ─────────────────  ───────────────────────
//! "/"                ""                 "/summary"
//! "/running_page"    "/running_page"    "/running_page/summary"
//! "/running_page/"   "/running_page/"   "/running_page//summary"
//! ```
//!
//! The last row is deliberate: no slash collapsing happens here, the
//! consuming router decides what a doubled slash means.

/// Normalize a base path into a link prefix.
///
/// Returns `""` for the root path `/`, otherwise `base` unchanged.
#[inline]
pub fn base_path_prefix(base: &str) -> &str {
    if base == "/" { "" } else { base }
}

/// Resolver for links relative to the deployed site root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasePath<'a> {
    raw: &'a str,
}

impl<'a> BasePath<'a> {
    #[inline]
    pub const fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// The base path exactly as supplied by the environment.
    #[inline]
    pub const fn raw(&self) -> &'a str {
        self.raw
    }

    /// Normalized prefix, see [`base_path_prefix`].
    #[inline]
    pub fn prefix(&self) -> &'a str {
        base_path_prefix(self.raw)
    }

    /// Whether the site is deployed at the domain root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.prefix().is_empty()
    }

    /// Build a link by plain concatenation of prefix and `path`.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// BasePath::new("/").link("/summary")              → "/summary"
    /// BasePath::new("/running_page/").link("/summary") → "/running_page//summary"
    /// ```
    pub fn link(&self, path: &str) -> String {
        format!("{}{path}", self.prefix())
    }
}
