//! Discovery, validation and reporting in one pass
//!
//! [`ReportDriver::run`] discovers presets once, validates them one after
//! another in discovery order, and reports. It returns the process exit
//! code instead of exiting so callers (and tests) decide what to do with it.

use crate::output::{format_count, format_duration, ColorMode, Status};
use presets_core::error::{exit_codes, Result};
use presets_core::parser::ConfigParser;
use presets_core::validation::{base_name, ValidationResult};
use presets_core::validator::ConfigValidator;
use serde::Serialize;
use std::any::Any;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};

/// Report layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Progress lines and a human-readable summary
    #[default]
    Text,
    /// A single JSON document
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files: usize,
    valid: bool,
    results: &'a [ValidationResult],
}

/// Runs a full validation pass and produces the report
pub struct ReportDriver<P> {
    validator: ConfigValidator<P>,
    format: OutputFormat,
    color: ColorMode,
}

impl<P: ConfigParser> ReportDriver<P> {
    /// Driver writing plain text reports
    pub fn new(validator: ConfigValidator<P>) -> Self {
        Self {
            validator,
            format: OutputFormat::Text,
            color: ColorMode::Never,
        }
    }

    /// Select the report layout
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Select the color mode for text reports
    pub fn color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Run discovery and validation, writing the report to `out`.
    ///
    /// Returns [`exit_codes::SUCCESS`] only when discovery succeeded and
    /// every preset is valid; any other outcome, including a failure to
    /// write the report, returns [`exit_codes::FAILURE`].
    pub fn run<W, D>(&self, discover: D, out: &mut W) -> i32
    where
        W: Write,
        D: FnOnce() -> Result<Vec<PathBuf>>,
    {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| match self.format {
            OutputFormat::Text => self.run_text(discover, &mut *out),
            OutputFormat::Json => self.run_json(discover, &mut *out),
        }));

        let message = match outcome {
            Ok(Ok(code)) => return code,
            Ok(Err(e)) => format!("Unexpected error: {}", e),
            Err(payload) => format!("Unexpected error: {}", panic_message(payload.as_ref())),
        };

        error!(%message, "validation run aborted");
        // The writer may be what failed; there is nowhere else to report to.
        let _ = Status::new(&mut *out, self.color).error(&message);
        exit_codes::FAILURE
    }

    fn run_text<W, D>(&self, discover: D, out: &mut W) -> io::Result<i32>
    where
        W: Write,
        D: FnOnce() -> Result<Vec<PathBuf>>,
    {
        let started = Instant::now();
        let mut status = Status::new(out, self.color);
        status.header("Validating tsconfig presets")?;

        let files = match discover() {
            Ok(files) => files,
            Err(e) => {
                error!(code = %e.code, "discovery failed");
                status.error(&e.to_string())?;
                return Ok(exit_codes::FAILURE);
            }
        };

        status.info(&format!(
            "Found {}",
            format_count(files.len(), "preset", "presets")
        ))?;
        status.line("")?;

        let mut results = Vec::with_capacity(files.len());
        for file in &files {
            status.pending(&base_name(file))?;
            let result = self.validator.validate(file);
            status.finish(result.is_valid())?;
            results.push(result);
        }

        let invalid: Vec<&ValidationResult> = results.iter().filter(|r| !r.is_valid()).collect();
        info!(total = results.len(), invalid = invalid.len(), "validation finished");

        if !invalid.is_empty() {
            status.header("Validation errors")?;
            for result in &invalid {
                status.item(&result.file_name(), result.errors())?;
            }
            status.line("")?;
            status.error(&format!(
                "{} of {} failed validation",
                invalid.len(),
                format_count(results.len(), "preset", "presets")
            ))?;
            return Ok(exit_codes::FAILURE);
        }

        status.line("")?;
        status.success(&format!(
            "All {} valid ({})",
            format_count(results.len(), "preset is", "presets are"),
            format_duration(started.elapsed())
        ))?;
        Ok(exit_codes::SUCCESS)
    }

    fn run_json<W, D>(&self, discover: D, out: &mut W) -> io::Result<i32>
    where
        W: Write,
        D: FnOnce() -> Result<Vec<PathBuf>>,
    {
        let files = match discover() {
            Ok(files) => files,
            Err(e) => {
                error!(code = %e.code, "discovery failed");
                serde_json::to_writer_pretty(
                    &mut *out,
                    &serde_json::json!({ "error": e.to_report() }),
                )?;
                writeln!(out)?;
                return Ok(exit_codes::FAILURE);
            }
        };

        let results: Vec<ValidationResult> =
            files.iter().map(|file| self.validator.validate(file)).collect();
        let valid = results.iter().all(ValidationResult::is_valid);

        let report = JsonReport {
            files: results.len(),
            valid,
            results: &results,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;

        Ok(if valid {
            exit_codes::SUCCESS
        } else {
            exit_codes::FAILURE
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "panic".to_string())
}
