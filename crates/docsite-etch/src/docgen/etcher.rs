//! Etcher - Main page generation orchestrator
//!
//! This module provides the Etcher struct which coordinates all page
//! generation activities: extraction, view building, rendering, and output.

use crate::builder::BuildOutput;
use crate::config::{ApiVersion, SourceFile};
use crate::diagnostics::{Diagnostic, DiagnosticsCollector, EtchError, EtchResult};
use crate::extract::Extractor;
use crate::render::{HandlebarsRenderer, PageRenderer};
use crate::section::Section;
use crate::signature::Flavor;
use crate::view::PageContext;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration for the Etcher
#[derive(Debug, Clone)]
pub struct EtchConfig {
    /// Version the pages are filed under
    pub api_version: ApiVersion,
    /// Folder the source paths are relative to
    pub source_dir: PathBuf,
    /// Files to document, in page order
    pub sources: Vec<SourceFile>,
    /// Site source root
    pub output_root: PathBuf,
    /// Whether to generate Markdown
    pub generate_markdown: bool,
    /// Whether to generate HTML
    pub generate_html: bool,
    /// Template folder with `markdown/` and `html/` subfolders
    pub template_dir: Option<PathBuf>,
    /// Title for every page instead of the source's class name
    pub title: Option<String>,
}

impl EtchConfig {
    /// Create a config with the default sources and Markdown output
    pub fn new(api_version: ApiVersion) -> Self {
        Self {
            api_version,
            source_dir: PathBuf::from("."),
            sources: crate::config::default_sources(),
            output_root: PathBuf::from("source"),
            generate_markdown: true,
            generate_html: false,
            template_dir: None,
            title: None,
        }
    }

    /// Version folder, `<output_root>/api-<version>`
    pub fn output_dir(&self) -> PathBuf {
        self.output_root.join(self.api_version.folder_name())
    }

    /// Get the effective title of a source's page
    pub fn effective_title(&self, source: &SourceFile) -> String {
        self.title.clone().unwrap_or_else(|| source.name.clone())
    }

    /// Enabled flavors, Markdown first
    pub fn flavors(&self) -> Vec<Flavor> {
        let mut flavors = vec![];
        if self.generate_markdown {
            flavors.push(Flavor::Markdown);
        }
        if self.generate_html {
            flavors.push(Flavor::Html);
        }
        flavors
    }
}

/// The main page generator
///
/// Etcher runs the whole batch, one source file at a time:
/// 1. Extract sections
/// 2. Build the page data for each flavor
/// 3. Render through the flavor's renderer
/// 4. Write `<stem>.md` / `<stem>.html` into the version folder
///
/// A file that fails at any step is recorded and skipped.
pub struct Etcher {
    /// Configuration
    config: EtchConfig,
    /// Section source
    extractor: Box<dyn Extractor>,
    /// Markdown renderer, when Markdown is enabled
    markdown: Option<Box<dyn PageRenderer>>,
    /// HTML renderer, when HTML is enabled
    html: Option<Box<dyn PageRenderer>>,
    /// Diagnostics collector
    diagnostics: DiagnosticsCollector,
}

impl Etcher {
    /// Create an Etcher with Handlebars renderers for the enabled flavors
    pub fn new(config: EtchConfig, extractor: Box<dyn Extractor>) -> EtchResult<Self> {
        let mut etcher = Self {
            config,
            extractor,
            markdown: None,
            html: None,
            diagnostics: DiagnosticsCollector::new(),
        };

        for flavor in etcher.config.flavors() {
            let renderer = match etcher.config.template_dir {
                Some(ref dir) => {
                    HandlebarsRenderer::from_dir(&dir.join(flavor_dir(flavor)), flavor)?
                }
                None => HandlebarsRenderer::for_flavor(flavor)?,
            };
            etcher = etcher.with_renderer(flavor, Box::new(renderer));
        }

        Ok(etcher)
    }

    /// Replace the renderer of a flavor
    pub fn with_renderer(mut self, flavor: Flavor, renderer: Box<dyn PageRenderer>) -> Self {
        match flavor {
            Flavor::Markdown => self.markdown = Some(renderer),
            Flavor::Html => self.html = Some(renderer),
        }
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &EtchConfig {
        &self.config
    }

    /// Get the diagnostics collector
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    fn renderer(&self, flavor: Flavor) -> Option<&dyn PageRenderer> {
        match flavor {
            Flavor::Markdown => self.markdown.as_deref(),
            Flavor::Html => self.html.as_deref(),
        }
    }

    /// Run the page generation pipeline
    pub fn run(&mut self) -> EtchResult<BuildOutput> {
        let output_dir = self.config.output_dir();
        info!("API version: {}", self.config.api_version);
        info!("Target folder: {}", output_dir.display());

        fs::create_dir_all(&output_dir)?;
        let mut output = BuildOutput::new(&output_dir);

        for source in self.config.sources.clone() {
            let path = self.config.source_dir.join(&source.path);

            let sections = match self.extractor.extract(&path) {
                Ok(sections) => sections,
                Err(e) => {
                    self.diagnostics
                        .add(Diagnostic::error(e.to_string()).in_file(&path));
                    output.failures.push(path);
                    continue;
                }
            };
            debug!("Extracted {} sections from {}", sections.len(), path.display());
            output.section_count += sections.len();

            let title = self.config.effective_title(&source);
            for flavor in self.config.flavors() {
                match self.write_page(&output_dir, &source, &title, &sections, flavor) {
                    Ok(file) => {
                        info!("Done '{}'!", file.display());
                        match flavor {
                            Flavor::Markdown => output.markdown_files.push(file),
                            Flavor::Html => output.html_files.push(file),
                        }
                    }
                    Err(e) => {
                        self.diagnostics
                            .add(Diagnostic::error(e.to_string()).in_file(&path));
                        if !output.failures.contains(&path) {
                            output.failures.push(path.clone());
                        }
                    }
                }
            }
        }

        if self.config.generate_markdown {
            let index = output_dir.join("index.md");
            if !index.exists() {
                fs::write(&index, "")?;
                debug!("Created {}", index.display());
            }
        }

        self.diagnostics.log_summary();

        Ok(output)
    }

    /// Render one page and write it next to the others
    fn write_page(
        &self,
        output_dir: &Path,
        source: &SourceFile,
        title: &str,
        sections: &[Section],
        flavor: Flavor,
    ) -> EtchResult<PathBuf> {
        let renderer = self.renderer(flavor).ok_or_else(|| {
            EtchError::template(format!(
                "No renderer for {} pages",
                flavor.extension()
            ))
        })?;

        let page = PageContext::new(title, self.config.api_version.as_str(), sections, flavor);
        let text = renderer.render(&page)?;

        let file = output_dir.join(format!("{}.{}", source.stem(), flavor.extension()));
        fs::write(&file, text)?;
        Ok(file)
    }

    /// Extract every source without rendering. Failures are recorded and the
    /// source is left out.
    pub fn extract_all(&mut self) -> Vec<(SourceFile, Vec<Section>)> {
        let mut result = vec![];
        for source in self.config.sources.clone() {
            let path = self.config.source_dir.join(&source.path);
            match self.extractor.extract(&path) {
                Ok(sections) => result.push((source, sections)),
                Err(e) => self
                    .diagnostics
                    .add(Diagnostic::error(e.to_string()).in_file(&path)),
            }
        }
        result
    }

    /// Print a terminal preview of every source to stdout.
    ///
    /// This prints with ANSI colors when the terminal supports them.
    pub fn print_preview(&mut self, use_color: bool) {
        use crate::printer::EtchPrinter;
        for (source, sections) in self.extract_all() {
            let printer = EtchPrinter::new(&source.name, &sections, use_color);
            printer.print_to_stdout();
        }
    }

    /// Generate preview without colors (for non-color terminals or piping).
    pub fn preview_plain(&mut self) -> String {
        use crate::printer::EtchPrinter;
        self.extract_all()
            .iter()
            .map(|(source, sections)| EtchPrinter::new(&source.name, sections, false).to_string())
            .collect()
    }
}

/// Subfolder of a template folder holding a flavor's templates
fn flavor_dir(flavor: Flavor) -> &'static str {
    match flavor {
        Flavor::Markdown => "markdown",
        Flavor::Html => "html",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::JsonExtractor;
    use crate::test::mock_sections_json;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn fixture() -> (tempfile::TempDir, EtchConfig, Box<dyn Extractor>) {
        let dir = tempfile::tempdir().unwrap();
        let json_dir = dir.path().join("json");
        fs::create_dir_all(&json_dir).unwrap();
        fs::write(
            json_dir.join("service-broker.json"),
            mock_sections_json("ServiceBroker"),
        )
        .unwrap();
        fs::write(json_dir.join("context.json"), mock_sections_json("Context")).unwrap();

        let mut config = EtchConfig::new(ApiVersion::new("0.14"));
        config.output_root = dir.path().join("source");
        (dir, config, Box::new(JsonExtractor::new(json_dir)))
    }

    struct TitleRenderer;

    impl PageRenderer for TitleRenderer {
        fn render(&self, page: &PageContext) -> EtchResult<String> {
            Ok(format!("{}@{}", page.title, page.api_version))
        }
    }

    struct FailingRenderer;

    impl PageRenderer for FailingRenderer {
        fn render(&self, _page: &PageContext) -> EtchResult<String> {
            Err(EtchError::template("broken"))
        }
    }

    #[test]
    fn test_etch_config() {
        let mut config = EtchConfig::new(ApiVersion::new("0.14"));
        assert_eq!(config.output_dir(), PathBuf::from("source/api-0.14"));
        assert_eq!(config.flavors(), vec![Flavor::Markdown]);
        assert_eq!(config.effective_title(&config.sources[2]), "Context");

        config.generate_html = true;
        config.title = Some("API".to_string());
        assert_eq!(config.flavors(), vec![Flavor::Markdown, Flavor::Html]);
        assert_eq!(config.effective_title(&config.sources[0]), "API");
    }

    #[test]
    fn test_run_continues_after_failure() {
        let (_dir, config, extractor) = fixture();
        let out_dir = config.output_dir();
        let mut etcher = Etcher::new(config, extractor).unwrap();
        let output = etcher.run().unwrap();

        // service.json is missing
        assert_eq!(output.failures, vec![PathBuf::from("./service.js")]);
        assert_eq!(
            output.markdown_files,
            vec![out_dir.join("service-broker.md"), out_dir.join("context.md")]
        );
        assert_eq!(output.section_count, 2);
        assert!(etcher.diagnostics().has_errors());

        let page = fs::read_to_string(out_dir.join("context.md")).unwrap();
        assert!(page.starts_with("title: Context\n---\n"));
        assert!(page.contains("## `new Context(options: Object)`"));
        assert!(page.contains("#### `PROTOCOL_VERSION` _static_"));
        assert!(page.contains("#### `start(): Promise`"));
        assert!(page.contains("#### `new Context(options: Object)`"));
        assert_eq!(fs::read_to_string(out_dir.join("index.md")).unwrap(), "");
    }

    #[test]
    fn test_existing_index_is_kept() {
        let (_dir, config, extractor) = fixture();
        let out_dir = config.output_dir();
        fs::create_dir_all(&out_dir).unwrap();
        fs::write(out_dir.join("index.md"), "title: API\n---\n").unwrap();

        Etcher::new(config, extractor).unwrap().run().unwrap();
        assert_eq!(
            fs::read_to_string(out_dir.join("index.md")).unwrap(),
            "title: API\n---\n"
        );
    }

    #[test]
    fn test_html_only() {
        let (_dir, mut config, extractor) = fixture();
        config.generate_markdown = false;
        config.generate_html = true;
        let out_dir = config.output_dir();

        let output = Etcher::new(config, extractor).unwrap().run().unwrap();
        assert!(output.markdown_files.is_empty());
        assert_eq!(output.html_files.len(), 2);
        assert!(!out_dir.join("index.md").exists());

        let page = fs::read_to_string(out_dir.join("context.html")).unwrap();
        assert!(page.contains("<h2><code>new Context(options: Object)</code></h2>"));
        // No constructor rule for HTML
        assert!(page.contains("<h4><code>constructor</code></h4>"));
    }

    #[test]
    fn test_injected_renderer() {
        let (_dir, config, extractor) = fixture();
        let out_dir = config.output_dir();
        let mut etcher = Etcher::new(config, extractor)
            .unwrap()
            .with_renderer(Flavor::Markdown, Box::new(TitleRenderer));
        etcher.run().unwrap();

        assert_eq!(
            fs::read_to_string(out_dir.join("service-broker.md")).unwrap(),
            "ServiceBroker@0.14"
        );
    }

    #[test]
    fn test_render_failure_is_recorded() {
        let (_dir, config, extractor) = fixture();
        let out_dir = config.output_dir();
        let mut etcher = Etcher::new(config, extractor)
            .unwrap()
            .with_renderer(Flavor::Markdown, Box::new(FailingRenderer));
        let output = etcher.run().unwrap();

        assert!(output.markdown_files.is_empty());
        assert_eq!(output.failures.len(), 3);
        assert_eq!(etcher.diagnostics().error_count(), 3);
        assert!(out_dir.join("index.md").exists());
    }

    #[test]
    fn test_template_dir() {
        let (dir, mut config, extractor) = fixture();
        let templates = dir.path().join("templates/markdown");
        fs::create_dir_all(&templates).unwrap();
        fs::write(templates.join("index.hbs"), "# {{title}}").unwrap();
        fs::write(templates.join("params.hbs"), "").unwrap();
        fs::write(templates.join("members.hbs"), "").unwrap();
        config.template_dir = Some(dir.path().join("templates"));
        let out_dir = config.output_dir();

        Etcher::new(config, extractor).unwrap().run().unwrap();
        assert_eq!(
            fs::read_to_string(out_dir.join("context.md")).unwrap(),
            "# Context"
        );
    }

    #[test]
    fn test_missing_template_dir_fails_early() {
        let (dir, mut config, extractor) = fixture();
        config.template_dir = Some(dir.path().join("nowhere"));
        assert!(matches!(
            Etcher::new(config, extractor),
            Err(EtchError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_preview_plain() {
        let (_dir, config, extractor) = fixture();
        let mut etcher = Etcher::new(config, extractor).unwrap();
        let preview = etcher.preview_plain();

        assert!(preview.contains("ServiceBroker(options)"));
        assert!(preview.contains("Context(options)"));
        assert_eq!(etcher.diagnostics().error_count(), 1);
    }
}
