//! Validation of a single preset file
//!
//! [`ConfigValidator::validate`] always returns a [`ValidationResult`]. Read
//! failures, semantic errors, parser faults and parser panics all end up as
//! error strings on the result; nothing escapes to the caller.

use crate::config::RuntimeSettings;
use crate::parser::ConfigParser;
use crate::validation::{base_name, ValidationResult};
use serde_json::Value;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::{debug, warn};

/// Validates preset files through a [`ConfigParser`]
pub struct ConfigValidator<P> {
    parser: P,
    runtime: RuntimeSettings,
}

impl<P: ConfigParser> ConfigValidator<P> {
    /// Create a validator with the default alternate runtime settings
    pub fn new(parser: P) -> Self {
        Self::with_runtime(parser, RuntimeSettings::default())
    }

    /// Create a validator with explicit alternate runtime settings
    pub fn with_runtime(parser: P, runtime: RuntimeSettings) -> Self {
        Self { parser, runtime }
    }

    /// The wrapped parser
    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Validate one file
    pub fn validate(&self, path: &Path) -> ValidationResult {
        match panic::catch_unwind(AssertUnwindSafe(|| self.validate_inner(path))) {
            Ok(result) => result,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!(file = %path.display(), %message, "parser panicked");
                ValidationResult::failed(path, message)
            }
        }
    }

    fn validate_inner(&self, path: &Path) -> ValidationResult {
        let is_alternate_runtime = base_name(path) == self.runtime.alternate_file;

        let raw = match self.parser.read_raw(path) {
            Ok(raw) => raw,
            Err(diagnostic) => {
                debug!(file = %path.display(), code = diagnostic.code, "read failed");
                return ValidationResult::failed(path, diagnostic.flatten());
            }
        };

        let filtered;
        let document = if is_alternate_runtime {
            filtered = filter_runtime_libs(&raw, &self.runtime.filtered_libs);
            &filtered
        } else {
            &raw
        };

        let base_dir = path.parent().unwrap_or(Path::new("."));
        let parsed = match self.parser.parse_semantics(document, base_dir, None, path) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "parser fault");
                return ValidationResult::failed(path, e.message);
            }
        };

        let errors: Vec<String> = parsed.errors().map(|d| d.flatten()).collect();
        debug!(
            file = %path.display(),
            alternate_runtime = is_alternate_runtime,
            diagnostics = parsed.diagnostics.len(),
            errors = errors.len(),
            "validated"
        );

        ValidationResult::from_errors(path, errors)
    }
}

/// Copy of `raw` with the given `compilerOptions.lib` entries removed.
///
/// Matching is exact and case-sensitive. Documents without a
/// `compilerOptions.lib` array come back unchanged.
pub fn filter_runtime_libs(raw: &Value, filtered: &[String]) -> Value {
    let mut document = raw.clone();
    if let Some(lib) = document
        .get_mut("compilerOptions")
        .and_then(|options| options.get_mut("lib"))
        .and_then(Value::as_array_mut)
    {
        lib.retain(|entry| {
            entry
                .as_str()
                .map_or(true, |name| !filtered.iter().any(|f| f == name))
        });
    }
    document
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("Unexpected error: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("Unexpected error: {}", s)
    } else {
        "Unexpected error: parser panicked".to_string()
    }
}
