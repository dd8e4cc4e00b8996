//! The configuration parser seam
//!
//! The validator never talks to a concrete parser. Anything that can read a
//! configuration file and check its contents implements [`ConfigParser`];
//! the binary wires in the real one and tests use fakes.

use crate::diagnostic::Diagnostic;
use crate::error::Result;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Output of the content parser
#[derive(Debug, Clone, Default)]
pub struct ParsedConfig {
    /// Effective compiler options, path options resolved against the base dir
    pub options: Map<String, Value>,
    /// Input files matched by `files` / `include`
    pub file_names: Vec<PathBuf>,
    /// Every diagnostic, in document order, regardless of category
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedConfig {
    /// Diagnostics with the error category only
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }
}

/// Reads and checks compiler configuration files.
///
/// Implementations own whatever file-system capability they need.
pub trait ConfigParser {
    /// Read `path` and parse it as a configuration document.
    ///
    /// Returns the raw document, or the diagnostic describing why it could
    /// not be read or parsed.
    fn read_raw(&self, path: &Path) -> std::result::Result<Value, Diagnostic>;

    /// Check a raw document against configuration semantics.
    ///
    /// `base_dir` anchors relative fields such as `include` and `outDir`.
    /// `existing_options` are merged under the document's own options.
    /// `config_path` is used for diagnostic attribution.
    ///
    /// An `Err` means the parser itself failed, not that the document is
    /// invalid; invalid documents produce diagnostics.
    fn parse_semantics(
        &self,
        raw: &Value,
        base_dir: &Path,
        existing_options: Option<&Map<String, Value>>,
        config_path: &Path,
    ) -> Result<ParsedConfig>;
}
