//! API page generation command for the docsite CLI
//!
//! This module provides the `docsite api` command: it resolves the run
//! configuration from `docsite.toml` and the flags, then runs the page
//! generator.

use crate::cli::ApiArgs;
use anyhow::{Context, Result};
use docsite_etch::builder::OutputFormat;
use docsite_etch::config::{ApiConfig, DocsiteConfig, PageFormat};
use docsite_etch::EtchBuilder;
use tracing::{info, warn};

/// Run the api command.
///
/// Errors are configuration problems only; files that fail to document are
/// logged and do not fail the command.
pub fn run(args: &ApiArgs) -> Result<()> {
    let config = DocsiteConfig::load(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;
    let api = apply_overrides(config.api, args);

    let builder = EtchBuilder::from_config(&api).context("Invalid API configuration")?;

    if args.preview {
        let mut etcher = builder.into_etcher()?;
        etcher.print_preview(true);
        return Ok(());
    }

    let output = builder.build()?;
    info!(
        "Generated {} page(s) with {} section(s) in {}",
        output.all_files().count(),
        output.section_count,
        output.output_dir.display()
    );
    if !output.is_complete() {
        warn!("{} source file(s) could not be documented", output.failures.len());
    }

    Ok(())
}

/// Let command-line flags win over the config file
pub fn apply_overrides(mut api: ApiConfig, args: &ApiArgs) -> ApiConfig {
    if let Some(ref version) = args.api_version {
        api.version = Some(version.clone());
    }
    if let Some(format) = args.format {
        let format = OutputFormat::from(format);
        api.formats.clear();
        if format.markdown() {
            api.formats.push(PageFormat::Markdown);
        }
        if format.html() {
            api.formats.push(PageFormat::Html);
        }
    }
    if let Some(ref dir) = args.json_dir {
        api.json_dir = Some(dir.clone());
    }
    if let Some(ref output) = args.output {
        api.output_root = output.clone();
    }
    api
}
