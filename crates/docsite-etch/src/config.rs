//! Run configuration
//!
//! Settings come from an optional `docsite.toml` next to the site sources.
//! Every key has a default matching the published site layout, so an empty
//! or missing file is a valid configuration.
//!
//! ```toml
//! [api]
//! source_dir = "node_modules/moleculer/src"
//! output_root = "source"
//! formats = ["markdown", "html"]
//!
//! [[api.sources]]
//! path = "service-broker.js"
//! name = "ServiceBroker"
//!
//! [modules]
//! url = "https://example.com/site_modules.yml"
//! output = "source/_data/modules.yml"
//! ```

use crate::diagnostics::{EtchError, EtchResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name
pub const CONFIG_FILE: &str = "docsite.toml";

/// Default remote module listing
pub const DEFAULT_MODULES_URL: &str =
    "https://raw.githubusercontent.com/AndreMaz/awesome-moleculer/master/out/site_modules.yml";

/// `major.minor` version the generated API pages belong to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Use a version string as-is
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// Truncate a full package version: `0.14.3` becomes `0.14`
    pub fn from_package_version(version: &str) -> EtchResult<Self> {
        let parsed = semver::Version::parse(version.trim()).map_err(|e| {
            EtchError::config(format!("Invalid package version '{}': {}", version, e))
        })?;
        Ok(Self(format!("{}.{}", parsed.major, parsed.minor)))
    }

    /// Read the `version` field of a `package.json`
    pub fn from_package_json(path: &Path) -> EtchResult<Self> {
        if !path.exists() {
            return Err(EtchError::FileNotFound(path.to_path_buf()));
        }
        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(path)?)?;
        let version = json
            .get("version")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                EtchError::config(format!("No version field in {}", path.display()))
            })?;
        Self::from_package_version(version)
    }

    /// The version text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Output folder name, `api-<version>`
    pub fn folder_name(&self) -> String {
        format!("api-{}", self.0)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A source file to document and the page title it gets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path relative to the source folder
    pub path: PathBuf,
    /// Documented class name
    pub name: String,
}

impl SourceFile {
    /// Create a source entry
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }

    /// File name without extension, used for the output page name
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name.clone())
    }
}

/// The files documented when nothing else is configured
pub fn default_sources() -> Vec<SourceFile> {
    vec![
        SourceFile::new("service-broker.js", "ServiceBroker"),
        SourceFile::new("service.js", "Service"),
        SourceFile::new("context.js", "Context"),
    ]
}

/// Page formats that can be generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    /// Hexo Markdown pages
    Markdown,
    /// Standalone HTML pages
    Html,
}

/// `[api]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Fixed API version; read from `package_json` when absent
    pub version: Option<String>,
    /// `package.json` of the documented dependency
    pub package_json: PathBuf,
    /// Folder the source paths are relative to
    pub source_dir: PathBuf,
    /// Site source root; pages go to `<output_root>/api-<version>`
    pub output_root: PathBuf,
    /// Files to document, in page order
    pub sources: Vec<SourceFile>,
    /// Formats to generate
    pub formats: Vec<PageFormat>,
    /// Pre-generated documentation.js JSON dumps instead of running the tool
    pub json_dir: Option<PathBuf>,
    /// Custom template folder
    pub template_dir: Option<PathBuf>,
    /// Page title for every page instead of the source's class name
    pub title: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            version: None,
            package_json: PathBuf::from("node_modules/moleculer/package.json"),
            source_dir: PathBuf::from("node_modules/moleculer/src"),
            output_root: PathBuf::from("source"),
            sources: default_sources(),
            formats: vec![PageFormat::Markdown],
            json_dir: None,
            template_dir: None,
            title: None,
        }
    }
}

impl ApiConfig {
    /// Resolve the API version: the configured one, else the package's
    pub fn api_version(&self) -> EtchResult<ApiVersion> {
        match self.version {
            Some(ref version) => {
                if version.trim().is_empty() {
                    return Err(EtchError::config("API version is empty"));
                }
                Ok(ApiVersion::new(version.trim()))
            }
            None => ApiVersion::from_package_json(&self.package_json),
        }
    }

    /// Whether a format is enabled
    pub fn wants(&self, format: PageFormat) -> bool {
        self.formats.contains(&format)
    }
}

/// `[modules]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulesConfig {
    /// Remote listing URL
    pub url: String,
    /// Destination file
    pub output: PathBuf,
}

impl Default for ModulesConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_MODULES_URL.to_string(),
            output: PathBuf::from("source/_data/modules.yml"),
        }
    }
}

/// Contents of `docsite.toml`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsiteConfig {
    /// API page generation
    pub api: ApiConfig,
    /// Module listing download
    pub modules: ModulesConfig,
}

impl DocsiteConfig {
    /// Parse TOML text
    pub fn from_toml(text: &str) -> EtchResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> EtchResult<Self> {
        if !path.exists() {
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
            .map_err(|e| EtchError::config(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_api_version_from_package_version() {
        assert_eq!(
            ApiVersion::from_package_version("0.14.3").unwrap().as_str(),
            "0.14"
        );
        assert_eq!(
            ApiVersion::from_package_version("1.0.0-beta.2").unwrap().as_str(),
            "1.0"
        );
        assert!(ApiVersion::from_package_version("0.14").is_err());
        assert!(ApiVersion::from_package_version("latest").is_err());
    }

    #[test]
    fn test_api_version_folder() {
        let version = ApiVersion::new("0.14");
        assert_eq!(version.folder_name(), "api-0.14");
        assert_eq!(version.to_string(), "0.14");
    }

    #[test]
    fn test_api_version_from_package_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{"name": "moleculer", "version": "0.13.9"}"#).unwrap();
        assert_eq!(ApiVersion::from_package_json(&path).unwrap().as_str(), "0.13");

        fs::write(&path, r#"{"name": "moleculer"}"#).unwrap();
        assert!(matches!(
            ApiVersion::from_package_json(&path),
            Err(EtchError::Config(_))
        ));

        assert!(matches!(
            ApiVersion::from_package_json(&dir.path().join("missing.json")),
            Err(EtchError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_defaults() {
        let config = DocsiteConfig::default();
        assert_eq!(config.api.sources, default_sources());
        assert_eq!(config.api.sources[0].stem(), "service-broker");
        assert_eq!(config.api.output_root, PathBuf::from("source"));
        assert!(config.api.wants(PageFormat::Markdown));
        assert!(!config.api.wants(PageFormat::Html));
        assert_eq!(config.modules.url, DEFAULT_MODULES_URL);
        assert_eq!(
            config.modules.output,
            PathBuf::from("source/_data/modules.yml")
        );
    }

    #[test]
    fn test_from_toml() {
        let config = DocsiteConfig::from_toml(
            r#"
            [api]
            version = "0.15"
            formats = ["markdown", "html"]

            [[api.sources]]
            path = "runner.js"
            name = "Runner"

            [modules]
            output = "data/modules.yml"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.api_version().unwrap().as_str(), "0.15");
        assert!(config.api.wants(PageFormat::Html));
        assert_eq!(config.api.sources, vec![SourceFile::new("runner.js", "Runner")]);
        assert_eq!(config.api.source_dir, PathBuf::from("node_modules/moleculer/src"));
        assert_eq!(config.modules.url, DEFAULT_MODULES_URL);
        assert_eq!(config.modules.output, PathBuf::from("data/modules.yml"));
    }

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        assert_eq!(DocsiteConfig::load(&path).unwrap(), DocsiteConfig::default());

        fs::write(&path, "[api\nversion = ").unwrap();
        assert!(matches!(
            DocsiteConfig::load(&path),
            Err(EtchError::Config(_))
        ));
    }

    #[test]
    fn test_empty_version_is_rejected() {
        let api = ApiConfig {
            version: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(api.api_version().is_err());
    }
}
