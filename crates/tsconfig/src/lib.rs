//! tsconfig parsing for the presets validator
//!
//! Provides [`TsConfigParser`], the [`ConfigParser`](presets_core::ConfigParser)
//! used by the `validate-presets` binary:
//!
//! - **Reading**: JSON with comments and trailing commas
//! - **Options**: declared compiler, watch and type acquisition options
//! - **File specs**: `include` / `exclude` validation and expansion
//! - **Host**: the file-system capability, swappable for tests

#![warn(clippy::all)]

pub mod host;
pub mod jsonc;
pub mod options;
pub mod parser;
pub mod specs;

pub use host::{ConfigHost, RealHost};
pub use parser::{ParseOptions, TsConfigParser};
