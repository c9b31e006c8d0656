//! Builder API for docsite-etch
//!
//! This module provides the main builder API for generating API pages,
//! used by the CLI and usable from other tooling.

mod etch_builder;

pub use etch_builder::{BuildOutput, EtchBuilder, OutputFormat};
