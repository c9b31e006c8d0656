//! Page generation core
//!
//! This module provides the pipeline that turns extracted sections into
//! rendered API pages inside the site's version folder.

mod etcher;

pub use etcher::{EtchConfig, Etcher};
