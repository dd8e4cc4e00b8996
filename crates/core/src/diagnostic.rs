//! Diagnostics reported by a configuration parser
//!
//! A diagnostic carries a severity category, a numeric code and a message
//! chain. Only [`DiagnosticCategory::Error`] entries make a preset invalid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Suggestion => "suggestion",
            Self::Message => "message",
        };
        f.write_str(s)
    }
}

/// A message with optional follow-up detail.
///
/// Nested entries explain the head message, e.g. the IO cause under
/// "Cannot read file".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageChain {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next: Vec<MessageChain>,
}

impl MessageChain {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            next: Vec::new(),
        }
    }

    /// Attach a follow-up message
    pub fn chain(mut self, next: MessageChain) -> Self {
        self.next.push(next);
        self
    }

    /// Flatten into a single display string.
    ///
    /// Each nesting level goes on its own line, indented two spaces deeper.
    pub fn flatten(&self) -> String {
        let mut out = String::new();
        self.flatten_into(&mut out, 0);
        out
    }

    fn flatten_into(&self, out: &mut String, depth: usize) {
        if depth > 0 {
            out.push('\n');
            out.push_str(&"  ".repeat(depth));
        }
        out.push_str(&self.text);
        for next in &self.next {
            next.flatten_into(out, depth + 1);
        }
    }
}

impl From<&str> for MessageChain {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for MessageChain {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// A structured parser diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub message: MessageChain,
    /// File the diagnostic is attributed to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Diagnostic {
    pub fn new(category: DiagnosticCategory, code: u32, message: impl Into<MessageChain>) -> Self {
        Self {
            category,
            code,
            message: message.into(),
            file: None,
        }
    }

    pub fn error(code: u32, message: impl Into<MessageChain>) -> Self {
        Self::new(DiagnosticCategory::Error, code, message)
    }

    pub fn warning(code: u32, message: impl Into<MessageChain>) -> Self {
        Self::new(DiagnosticCategory::Warning, code, message)
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }

    /// Flattened message text, without category or code
    pub fn flatten(&self) -> String {
        self.message.flatten()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} TS{}: {}", self.category, self.code, self.flatten())
    }
}
