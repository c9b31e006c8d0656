//! Module listing command for the docsite CLI

use crate::cli::ModulesArgs;
use anyhow::{Context, Result};
use docsite_etch::config::DocsiteConfig;
use docsite_etch::ModulesFetcher;
use tracing::info;

/// Run the modules command
pub fn run(args: &ModulesArgs) -> Result<()> {
    let mut config = DocsiteConfig::load(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?
        .modules;
    if let Some(ref url) = args.url {
        config.url = url.clone();
    }
    if let Some(ref output) = args.output {
        config.output = output.clone();
    }

    let fetcher = ModulesFetcher::from_config(&config);
    let bytes = fetcher
        .fetch()
        .with_context(|| format!("Failed to download {}", fetcher.url()))?;
    info!("Module listing updated ({} bytes)", bytes);
    Ok(())
}
