//! Core of the tsconfig presets validator
//!
//! This crate provides everything the validator needs apart from a concrete
//! configuration parser:
//!
//! - **Error handling**: errors with codes, context and recovery suggestions
//! - **Discovery**: published preset paths from the package manifest
//! - **Validation**: per-file results built through the [`ConfigParser`] seam
//! - **Settings**: optional TOML settings with defaults
//! - **File scanning**: directory walks used to expand `include` patterns
//!
//! # Example
//!
//! ```rust,ignore
//! use presets_core::{manifest, validator::ConfigValidator};
//!
//! let files = manifest::discover_config_files("package.json".as_ref(), ".json")?;
//! let validator = ConfigValidator::new(parser);
//! for file in &files {
//!     let result = validator.validate(file);
//!     println!("{} {}", result.file_name(), result.is_valid());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod file_scanner;
pub mod manifest;
pub mod parser;
pub mod validation;
pub mod validator;

pub use error::{Error, ErrorCode, Result};
pub use parser::{ConfigParser, ParsedConfig};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Settings;
    pub use crate::diagnostic::{Diagnostic, DiagnosticCategory, MessageChain};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result};
    pub use crate::manifest::discover_config_files;
    pub use crate::parser::{ConfigParser, ParsedConfig};
    pub use crate::validation::ValidationResult;
    pub use crate::validator::ConfigValidator;
}
