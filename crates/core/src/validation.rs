//! Per-file validation results
//!
//! One [`ValidationResult`] exists per discovered preset. A result is valid
//! exactly when it holds no errors; the constructors keep that true.
//!
//! # Example
//!
//! ```rust
//! use presets_core::validation::ValidationResult;
//!
//! let mut result = ValidationResult::passed("bases/node20.json");
//! assert!(result.is_valid());
//!
//! result.push_error("Unknown compiler option 'strct'.");
//! assert!(!result.is_valid());
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of validating one configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    file: PathBuf,
    valid: bool,
    errors: Vec<String>,
}

impl ValidationResult {
    /// A result with no errors
    pub fn passed(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            valid: true,
            errors: Vec::new(),
        }
    }

    /// A result holding `errors`; valid when the list is empty
    pub fn from_errors(file: impl Into<PathBuf>, errors: Vec<String>) -> Self {
        Self {
            file: file.into(),
            valid: errors.is_empty(),
            errors,
        }
    }

    /// A result with a single error
    pub fn failed(file: impl Into<PathBuf>, error: impl Into<String>) -> Self {
        Self::from_errors(file, vec![error.into()])
    }

    /// Record another error
    pub fn push_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.valid = false;
    }

    /// Absolute path of the validated file
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Final path segment, used in progress and report lines
    pub fn file_name(&self) -> String {
        base_name(&self.file)
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// All errors, in the order they were recorded
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// Final path segment, falling back to the whole path
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
