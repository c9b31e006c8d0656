//! Site theme helpers
//!
//! Pure functions behind the documentation website's navigation: language
//! prefixed URLs, version selection, sidebar and prev/next links, heading
//! anchors. They take the site's data files as explicit [`SiteData`] instead
//! of reaching into a site generator.
//!
//! Pages are addressed by their canonical path, `<type>/<version>/<page>`,
//! e.g. `docs/0.14/services.html`.

pub mod anchor;
pub mod nav;
pub mod slug;
pub mod urls;

pub use anchor::page_anchor;
pub use nav::{doc_sidebar, header_menu, page_nav, NavContext};
pub use urls::{is_external, UrlBuilder, DEFAULT_LANG};

use crate::diagnostics::EtchResult;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Sidebar of one section type: group title → (item text → link)
pub type Sidebar = IndexMap<String, IndexMap<String, String>>;

/// Translates i18n keys for display
pub trait Translate {
    /// Translate `key`, returning the key itself when there is no entry
    fn translate(&self, key: &str) -> String;
}

impl Translate for IndexMap<String, String> {
    fn translate(&self, key: &str) -> String {
        self.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}

/// A page's canonical path split into segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalPath<'a> {
    raw: &'a str,
}

impl<'a> CanonicalPath<'a> {
    /// Wrap a canonical path such as `docs/0.14/services.html`
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// All `/`-separated segments
    pub fn segments(&self) -> Vec<&'a str> {
        self.raw.split('/').collect()
    }

    /// First segment (`docs`, `api`, ...)
    pub fn section_type(&self) -> Option<&'a str> {
        self.raw.split('/').next()
    }

    /// Second segment, when present
    pub fn version(&self) -> Option<&'a str> {
        self.raw.split('/').nth(1)
    }

    /// Version shown for the page: the path's own version for pages below a
    /// version folder, `latest` otherwise
    pub fn version_or<'b>(&self, latest: &'b str) -> &'b str
    where
        'a: 'b,
    {
        let segments = self.segments();
        if segments.len() > 2 {
            segments[1]
        } else {
            latest
        }
    }

    /// The raw path
    pub fn as_str(&self) -> &'a str {
        self.raw
    }
}

/// Published versions of each section type.
///
/// Versions are listed newest first; `latest` is the one the site treats as
/// current, so anything listed before it is a pre-release.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Versions {
    /// Current stable version
    pub latest: String,
    /// Section type → (version → display title)
    #[serde(flatten)]
    pub by_type: IndexMap<String, IndexMap<String, String>>,
}

impl Versions {
    /// Versions of a section type in listing order
    pub fn for_type(&self, section_type: &str) -> Option<&IndexMap<String, String>> {
        self.by_type.get(section_type)
    }

    /// Listing positions of the page's version and of `latest`, `-1` when
    /// missing. `None` when the page has no version or the type has none.
    fn positions(&self, path: &CanonicalPath<'_>) -> Option<(isize, isize)> {
        let segments = path.segments();
        if segments.len() < 2 {
            return None;
        }
        let versions = self.for_type(segments[0])?;
        if versions.is_empty() {
            return None;
        }

        let index_of = |v: &str| {
            versions
                .get_index_of(v)
                .map(|i| i as isize)
                .unwrap_or(-1)
        };
        Some((index_of(segments[1]), index_of(&self.latest)))
    }

    /// Page belongs to a version older than `latest`
    pub fn is_older(&self, path: &CanonicalPath<'_>) -> bool {
        self.positions(path)
            .is_some_and(|(idx, latest)| idx > latest)
    }

    /// Page belongs to `latest` while a newer pre-release exists
    pub fn is_current(&self, path: &CanonicalPath<'_>) -> bool {
        self.positions(path)
            .is_some_and(|(idx, latest)| idx == latest && idx > 0)
    }

    /// Page belongs to a pre-release newer than `latest`
    pub fn is_newer(&self, path: &CanonicalPath<'_>) -> bool {
        self.positions(path)
            .is_some_and(|(idx, latest)| idx < latest)
    }

    /// Landing URL of the newest listed version
    pub fn beta_url(&self, section_type: &str) -> Option<String> {
        let newest = self.for_type(section_type)?.keys().next()?;
        Some(format!("/docs/{}/", newest))
    }
}

/// A language entry: either just a display name or a detailed record
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Language {
    /// Display name only
    Name(String),
    /// Display name plus extra settings
    Detailed {
        /// Display name
        #[serde(default)]
        name: Option<String>,
        /// Comment widget language code
        #[serde(default)]
        disqus_lang: Option<String>,
    },
}

/// The site's data files
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SiteData {
    /// Published versions
    #[serde(default)]
    pub versions: Versions,
    /// Version → section type → sidebar
    #[serde(default)]
    pub sidebars: IndexMap<String, IndexMap<String, Sidebar>>,
    /// Header menu: title → path
    #[serde(default)]
    pub menu: IndexMap<String, String>,
    /// Language code → language
    #[serde(default)]
    pub languages: IndexMap<String, Language>,
}

impl SiteData {
    /// Parse site data from JSON, keeping the order of every map
    pub fn from_json(json: &str) -> EtchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load site data from a JSON file
    pub fn load(path: &Path) -> EtchResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Sidebar of a section type in a version
    pub fn sidebar(&self, version: &str, section_type: &str) -> Option<&Sidebar> {
        self.sidebars.get(version)?.get(section_type)
    }

    /// Display name of a language, the code itself when unknown
    pub fn lang_name(&self, lang: &str) -> String {
        match self.languages.get(lang) {
            Some(Language::Name(name)) => name.clone(),
            Some(Language::Detailed { name: Some(name), .. }) => name.clone(),
            _ => lang.to_string(),
        }
    }
}
