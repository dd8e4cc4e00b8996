//! CLI utilities for the presets validator
//!
//! Provides shared CLI functionality:
//! - Terminal output formatting
//! - The report driver that ties discovery, validation and output together

#![warn(missing_docs)]

pub mod output;
pub mod report;

pub use output::{ColorMode, Status};
pub use report::{OutputFormat, ReportDriver};
