//! Section extraction
//!
//! Turning source comments into sections is the job of documentation.js.
//! [`Extractor`] is the seam: [`CommandExtractor`] runs the tool,
//! [`JsonExtractor`] reads output it produced earlier.

use crate::diagnostics::{EtchError, EtchResult};
use crate::section::{parse_sections, Section};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Produces the sections documented in one source file
pub trait Extractor {
    /// Extract all top-level sections of `source`
    fn extract(&self, source: &Path) -> EtchResult<Vec<Section>>;
}

/// Reads pre-generated `documentation build --format json` dumps.
///
/// The dump for `src/service-broker.js` is expected at
/// `<dir>/service-broker.json`.
#[derive(Debug, Clone)]
pub struct JsonExtractor {
    dir: PathBuf,
}

impl JsonExtractor {
    /// Read dumps from `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Location of the dump for a source file
    pub fn dump_path(&self, source: &Path) -> PathBuf {
        let stem = source.file_stem().unwrap_or(source.as_os_str());
        self.dir.join(format!("{}.json", stem.to_string_lossy()))
    }
}

impl Extractor for JsonExtractor {
    fn extract(&self, source: &Path) -> EtchResult<Vec<Section>> {
        let path = self.dump_path(source);
        if !path.exists() {
            return Err(EtchError::FileNotFound(path));
        }
        let json = std::fs::read_to_string(&path)?;
        parse_sections(&json, &path)
    }
}

/// Runs the documentation.js command line tool
#[derive(Debug, Clone)]
pub struct CommandExtractor {
    /// Path of the `documentation` executable
    program: PathBuf,
    /// Only document the given file, not what it requires
    shallow: bool,
    /// Names matching this pattern are marked private
    infer_private: Option<String>,
}

impl CommandExtractor {
    /// Use a specific executable
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            shallow: true,
            infer_private: Some("^_".to_string()),
        }
    }

    /// Find `documentation` under `node_modules/.bin` of `project_root`, then on `PATH`
    pub fn locate(project_root: &Path) -> EtchResult<Self> {
        let local = project_root.join("node_modules/.bin/documentation");
        if local.exists() {
            return Ok(Self::new(local));
        }

        which::which("documentation").map(Self::new).map_err(|e| {
            EtchError::config(format!(
                "documentation.js not found in node_modules/.bin or PATH: {}",
                e
            ))
        })
    }

    /// Set shallow mode
    pub fn shallow(mut self, shallow: bool) -> Self {
        self.shallow = shallow;
        self
    }

    /// Set the private-name pattern
    pub fn infer_private(mut self, pattern: Option<String>) -> Self {
        self.infer_private = pattern;
        self
    }

    /// Arguments passed to the tool for one source file
    pub fn args(&self, source: &Path) -> Vec<String> {
        let mut args = vec![
            "build".to_string(),
            source.display().to_string(),
            "--format".to_string(),
            "json".to_string(),
        ];
        if self.shallow {
            args.push("--shallow".to_string());
        }
        if let Some(ref pattern) = self.infer_private {
            args.push("--infer-private".to_string());
            args.push(pattern.clone());
        }
        args
    }
}

impl Extractor for CommandExtractor {
    fn extract(&self, source: &Path) -> EtchResult<Vec<Section>> {
        if !source.exists() {
            return Err(EtchError::FileNotFound(source.to_path_buf()));
        }

        tracing::debug!("Running {} on {}", self.program.display(), source.display());
        let output = Command::new(&self.program).args(self.args(source)).output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EtchError::extract(
                source,
                format!("{} ({})", stderr.trim(), output.status),
            ));
        }

        let json = String::from_utf8_lossy(&output.stdout);
        parse_sections(&json, source)
    }
}
