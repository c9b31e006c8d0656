//! Language-aware URL construction
//!
//! The site serves English at the root and every other language under a
//! `/<lang>` prefix. Canonical paths (`docs/0.14/services.html`) are
//! language-neutral.

use serde::{Deserialize, Serialize};

/// Language served without a prefix
pub const DEFAULT_LANG: &str = "en";

/// Builds site URLs from a site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlBuilder {
    /// Public base URL, e.g. `https://moleculer.services`
    pub site_url: String,
    /// Path the site is mounted under, `/` by default
    #[serde(default = "default_root")]
    pub root: String,
    /// Prefix for "edit this page" links
    #[serde(default)]
    pub edit_link: String,
}

fn default_root() -> String {
    "/".to_string()
}

impl UrlBuilder {
    /// Create a builder for a site mounted at `/`
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            root: default_root(),
            edit_link: String::new(),
        }
    }

    /// Mount the site under another root
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        let mut root = root.into();
        if !root.ends_with('/') {
            root.push('/');
        }
        self.root = root;
        self
    }

    /// Set the "edit this page" prefix
    pub fn with_edit_link(mut self, edit_link: impl Into<String>) -> Self {
        self.edit_link = edit_link.into();
        self
    }

    /// Site-relative URL of a path. Absolute URLs and `#`/`//` links pass
    /// through unchanged.
    pub fn url_for(&self, path: &str) -> String {
        if is_external(path) || path.starts_with('#') || path.starts_with("//") {
            return path.to_string();
        }
        format!("{}{}", self.root, path.trim_start_matches('/'))
    }

    /// Site-relative URL in a given language
    pub fn url_for_lang(&self, path: &str, lang: &str) -> String {
        let url = self.url_for(path);
        if lang != DEFAULT_LANG && url.starts_with('/') {
            format!("/{}{}", lang, url)
        } else {
            url
        }
    }

    /// Absolute canonical URL of a page in a given language
    pub fn canonical_url(&self, canonical_path: &str, lang: Option<&str>) -> String {
        let path = match lang {
            Some(lang) if lang != DEFAULT_LANG => format!("{}/{}", lang, canonical_path),
            _ => canonical_path.to_string(),
        };
        format!("{}/{}", self.site_url.trim_end_matches('/'), path)
    }

    /// Link to the page source in the repository
    pub fn raw_link(&self, path: &str) -> String {
        format!("{}{}", self.edit_link, path)
    }
}

/// Whether a link leaves the site
pub fn is_external(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}
