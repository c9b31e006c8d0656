//! EtchBuilder - Main API for API page generation
//!
//! This module provides the builder pattern API for configuring and
//! running page generation, from the CLI or from other tooling.

use crate::config::{ApiConfig, ApiVersion, PageFormat, SourceFile};
use crate::diagnostics::{EtchError, EtchResult};
use crate::docgen::{EtchConfig, Etcher};
use crate::extract::{CommandExtractor, Extractor, JsonExtractor};
use std::path::{Path, PathBuf};

/// Output format for pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Hexo Markdown (.md)
    #[default]
    Markdown,
    /// Standalone HTML
    Html,
    /// Both formats
    Both,
}

impl OutputFormat {
    /// Whether Markdown pages are produced
    pub fn markdown(&self) -> bool {
        matches!(self, Self::Markdown | Self::Both)
    }

    /// Whether HTML pages are produced
    pub fn html(&self) -> bool {
        matches!(self, Self::Html | Self::Both)
    }
}

/// Build output listing the generated pages
#[derive(Debug)]
pub struct BuildOutput {
    /// Generated Markdown files
    pub markdown_files: Vec<PathBuf>,
    /// Generated HTML files
    pub html_files: Vec<PathBuf>,
    /// Version folder the pages were written to
    pub output_dir: PathBuf,
    /// Number of top-level sections documented
    pub section_count: usize,
    /// Source files that could not be documented
    pub failures: Vec<PathBuf>,
}

impl BuildOutput {
    /// Create an empty build output
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            markdown_files: vec![],
            html_files: vec![],
            output_dir: output_dir.into(),
            section_count: 0,
            failures: vec![],
        }
    }

    /// Get all generated files
    pub fn all_files(&self) -> impl Iterator<Item = &PathBuf> {
        self.markdown_files.iter().chain(self.html_files.iter())
    }

    /// Whether every source file was documented
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Builder for configuring page generation
///
/// # Example
///
/// ```no_run
/// use docsite_etch::{ApiVersion, EtchBuilder};
///
/// EtchBuilder::new(ApiVersion::new("0.14"))
///     .source_dir("node_modules/moleculer/src")
///     .source("context.js", "Context")
///     .output_root("source")
///     .json_dir("docs-json")
///     .build()
///     .expect("Failed to generate API pages");
/// ```
#[derive(Debug)]
pub struct EtchBuilder {
    /// Version the pages are filed under
    pub api_version: ApiVersion,
    /// Folder the source paths are relative to
    pub source_dir: PathBuf,
    /// Files to document
    pub sources: Vec<SourceFile>,
    /// Site source root
    pub output_root: PathBuf,
    /// Whether to generate Markdown
    pub generate_markdown: bool,
    /// Whether to generate HTML
    pub generate_html: bool,
    /// Custom template folder
    pub template_dir: Option<PathBuf>,
    /// Title override
    pub title: Option<String>,
    /// Pre-generated JSON dumps
    pub json_dir: Option<PathBuf>,
}

impl EtchBuilder {
    /// Create a new builder for an API version
    pub fn new(api_version: ApiVersion) -> Self {
        Self {
            api_version,
            source_dir: PathBuf::from("."),
            sources: vec![],
            output_root: PathBuf::from("source"),
            generate_markdown: true,
            generate_html: false,
            template_dir: None,
            title: None,
            json_dir: None,
        }
    }

    /// Create a builder from the `[api]` config table
    pub fn from_config(config: &ApiConfig) -> EtchResult<Self> {
        let mut builder = Self::new(config.api_version()?)
            .source_dir(&config.source_dir)
            .output_root(&config.output_root)
            .generate_markdown(config.wants(PageFormat::Markdown))
            .generate_html(config.wants(PageFormat::Html));
        builder.sources = config.sources.clone();
        builder.template_dir = config.template_dir.clone();
        builder.title = config.title.clone();
        builder.json_dir = config.json_dir.clone();
        Ok(builder)
    }

    /// Set the source folder
    pub fn source_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_dir = path.into();
        self
    }

    /// Add a source file
    pub fn source(mut self, path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        self.sources.push(SourceFile::new(path, name));
        self
    }

    /// Set the site source root
    pub fn output_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_root = path.into();
        self
    }

    /// Enable or disable Markdown generation
    pub fn generate_markdown(mut self, enable: bool) -> Self {
        self.generate_markdown = enable;
        self
    }

    /// Enable or disable HTML generation
    pub fn generate_html(mut self, enable: bool) -> Self {
        self.generate_html = enable;
        self
    }

    /// Select the formats at once
    pub fn format(self, format: OutputFormat) -> Self {
        self.generate_markdown(format.markdown())
            .generate_html(format.html())
    }

    /// Load templates from a folder instead of the built-in ones
    pub fn template_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(path.into());
        self
    }

    /// Use one title for every page
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Read pre-generated documentation.js JSON from a folder
    pub fn json_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_dir = Some(path.into());
        self
    }

    /// Version folder the pages go to
    pub fn output_dir(&self) -> PathBuf {
        self.output_root.join(self.api_version.folder_name())
    }

    /// Pick the extractor: JSON dumps when configured, else the
    /// documentation.js CLI found near the sources
    fn extractor(&self) -> EtchResult<Box<dyn Extractor>> {
        if let Some(ref dir) = self.json_dir {
            return Ok(Box::new(JsonExtractor::new(dir)));
        }
        Ok(Box::new(CommandExtractor::locate(Path::new("."))?))
    }

    /// Turn the builder into an etcher without running it
    pub fn into_etcher(self) -> EtchResult<Etcher> {
        if !self.generate_markdown && !self.generate_html {
            return Err(EtchError::config(
                "At least one output format must be enabled",
            ));
        }
        if self.sources.is_empty() {
            return Err(EtchError::config("No source files configured"));
        }

        let extractor = self.extractor()?;
        let config = EtchConfig {
            api_version: self.api_version,
            source_dir: self.source_dir,
            sources: self.sources,
            output_root: self.output_root,
            generate_markdown: self.generate_markdown,
            generate_html: self.generate_html,
            template_dir: self.template_dir,
            title: self.title,
        };
        Etcher::new(config, extractor)
    }

    /// Generate the pages
    ///
    /// This method:
    /// 1. Extracts the sections of every source file
    /// 2. Computes signatures and page data
    /// 3. Renders and writes each enabled format
    pub fn build(self) -> EtchResult<BuildOutput> {
        self.into_etcher()?.run()
    }
}
