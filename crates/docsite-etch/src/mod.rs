//! docsite-etch: API page generator for the documentation website
//!
//! This crate turns JSDoc comments of a JavaScript library into API pages by:
//! - Extracting sections with documentation.js (or reading its JSON output)
//! - Computing a display signature for every section
//! - Rendering Markdown pages for the site generator and standalone HTML
//! - Filing pages under a version folder, `api-<major.minor>`
//!
//! It also carries the site theme's navigation helpers and the module
//! listing download.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐
//! │ documentation.js│    │ JSON dumps       │
//! │ (CLI run)       │    │ (pre-generated)  │
//! └────────┬────────┘    └────────┬─────────┘
//!          │                      │
//!          └──────────┬───────────┘
//!                     ▼
//!              ┌──────────────┐
//!              │   Section    │
//!              └──────┬───────┘
//!                     ▼
//!              ┌──────────────┐
//!              │ PageContext  │  signatures, params, members
//!              └──────┬───────┘
//!          ┌──────────┴──────────┐
//!          ▼                     ▼
//!    ┌──────────┐         ┌──────────┐
//!    │ Markdown │         │   HTML   │
//!    └──────────┘         └──────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use docsite_etch::{ApiVersion, EtchBuilder};
//!
//! EtchBuilder::new(ApiVersion::from_package_version("0.14.3").unwrap())
//!     .source_dir("node_modules/moleculer/src")
//!     .source("service-broker.js", "ServiceBroker")
//!     .source("context.js", "Context")
//!     .generate_html(true)
//!     .build()
//!     .expect("Failed to generate API pages");
//! ```

// Core types
pub mod js_doc;
pub mod params;
pub mod section;
pub mod types;

// Signatures and page data
pub mod signature;
pub mod view;

// Extraction, rendering and configuration
pub mod config;
pub mod diagnostics;
pub mod extract;
pub mod printer;
pub mod render;
pub mod test;

// Submodules
pub mod builder;
pub mod docgen;
pub mod modules;
pub mod site;

// Re-exports for convenience
pub use config::{ApiVersion, DocsiteConfig, SourceFile};
pub use diagnostics::{EtchError, EtchResult};
pub use js_doc::{Description, Example, Tag};
pub use params::{format_parameter, format_parameter_list, Parameter, ReturnDescriptor};
pub use section::{parse_sections, Callable, Members, Section, SectionDef, VariableKind};
pub use signature::{is_callable, short_signature, signature, Flavor};
pub use types::{TypeDescriptor, TypeKind};
pub use view::{PageContext, ParamView, SectionView};

// Extraction and rendering
pub use extract::{CommandExtractor, Extractor, JsonExtractor};
pub use render::{HandlebarsRenderer, PageRenderer};

// Terminal output
pub use printer::EtchPrinter;

// Builder API
pub use builder::{BuildOutput, EtchBuilder};

// Page generation
pub use docgen::{EtchConfig, Etcher};

// Module listing
pub use modules::ModulesFetcher;
