//! Command-line interface definition for docsite.
//!
//! - `docsite api` - Generate the API pages of the current version
//! - `docsite modules` - Download the module listing

use clap::{Args, Parser, Subcommand, ValueEnum};
use docsite_etch::builder::OutputFormat;
use docsite_etch::config::CONFIG_FILE;
use std::path::PathBuf;

/// docsite - documentation website build tools
#[derive(Parser, Debug)]
#[command(
    name = "docsite",
    version,
    about = "Build tools for the documentation website"
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate API pages from source comments
    ///
    /// Writes one page per source file into `<output>/api-<major.minor>/`.
    Api(ApiArgs),

    /// Download the module listing into the site's data folder
    Modules(ModulesArgs),
}

/// Page formats selectable on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    /// Markdown pages for the site generator
    Markdown,
    /// Standalone HTML pages
    Html,
    /// Both
    Both,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Both => OutputFormat::Both,
        }
    }
}

/// Arguments for the api command
#[derive(Args, Debug)]
pub struct ApiArgs {
    /// Config file
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// API version (`major.minor`); read from the package when omitted
    #[arg(long, value_name = "VERSION")]
    pub api_version: Option<String>,

    /// Output format, overriding the config file
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Read documentation.js JSON dumps from this folder
    #[arg(long, value_name = "DIR")]
    pub json_dir: Option<PathBuf>,

    /// Site source root, overriding the config file
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Print the extracted sections instead of writing pages
    #[arg(long)]
    pub preview: bool,
}

/// Arguments for the modules command
#[derive(Args, Debug)]
pub struct ModulesArgs {
    /// Config file
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Listing URL, overriding the config file
    #[arg(long)]
    pub url: Option<String>,

    /// Destination file, overriding the config file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
