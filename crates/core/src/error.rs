//! Error handling with codes, context and recovery suggestions
//!
//! Every failure the validator can surface outside a per-file result goes
//! through [`Error`]:
//! - Manifest failures (missing, unreadable, malformed, no `exports`)
//! - Settings file failures
//! - Unexpected faults caught at a boundary
//!
//! Per-file parse and semantic problems never become an [`Error`]; they are
//! recorded in a [`ValidationResult`](crate::validation::ValidationResult).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // IO errors (2xxx)
    IoError = 2000,

    // Manifest errors (3xxx)
    ManifestNotFound = 3001,
    ManifestUnreadable = 3002,
    ManifestParseError = 3003,
    MissingExports = 3004,

    // Settings errors (4xxx)
    SettingsError = 4000,
    SettingsParseError = 4001,

    // Validation errors (6xxx)
    UnexpectedFault = 6000,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            2 => "IO",
            3 => "Manifest",
            4 => "Settings",
            6 => "Validation",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Main error type with rich context
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context
    pub context: Option<String>,
    /// Recovery suggestion
    pub suggestion: Option<String>,
    /// Source error
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {}", ctx)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a recovery suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// True for every failure that means the package manifest is unusable
    pub fn is_manifest_error(&self) -> bool {
        self.code.category() == "Manifest"
    }

    /// Convert to a serializable report
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code,
            code_str: self.code.to_string(),
            category: self.code.category().to_string(),
            message: self.message.clone(),
            context: self.context.clone(),
            suggestion: self.suggestion.clone(),
            source: self.source.as_ref().map(|e| e.to_string()),
        }
    }

    // Convenience constructors

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::IoError, message)
    }

    pub fn manifest_not_found(path: impl AsRef<Path>) -> Self {
        Self::new(
            ErrorCode::ManifestNotFound,
            format!("Package manifest not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Run from the presets package or pass --manifest <path>")
    }

    pub fn manifest_unreadable(path: impl AsRef<Path>) -> Self {
        Self::new(
            ErrorCode::ManifestUnreadable,
            format!("Cannot read package manifest: {}", path.as_ref().display()),
        )
    }

    pub fn manifest_parse(path: impl AsRef<Path>) -> Self {
        Self::new(
            ErrorCode::ManifestParseError,
            format!("Package manifest is not valid JSON: {}", path.as_ref().display()),
        )
    }

    pub fn missing_exports(path: impl AsRef<Path>) -> Self {
        Self::new(
            ErrorCode::MissingExports,
            format!("No \"exports\" object in {}", path.as_ref().display()),
        )
        .with_suggestion("Add an \"exports\" table mapping import paths to preset files")
    }

    pub fn settings(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SettingsError, message)
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnexpectedFault, message)
    }
}

/// Serializable error report for logging and JSON output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub code_str: String,
    pub category: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for the validator.
///
/// The process never exits with anything else.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(
            ErrorCode::SettingsParseError,
            format!("TOML parse error: {}", err),
        )
        .with_source(err)
    }
}
