//! Terminal output utilities
//!
//! Provides consistent formatting for validator output. Everything is
//! written through an injected [`Write`] so reports can be captured.

use owo_colors::{OwoColorize, Stream};
use std::fmt::Display;
use std::io::{self, Write};

/// Whether glyphs and headings get ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when stdout supports it
    Auto,
    /// Never color
    Never,
}

/// Status message helpers over a writer
pub struct Status<W> {
    out: W,
    color: ColorMode,
}

impl<W: Write> Status<W> {
    /// Status writer with the given color mode
    pub fn new(out: W, color: ColorMode) -> Self {
        Self { out, color }
    }

    /// Status writer that never emits color codes
    pub fn plain(out: W) -> Self {
        Self::new(out, ColorMode::Never)
    }

    /// Give back the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint<F, T>(&self, text: &str, style: F) -> String
    where
        F: Fn(&str) -> T,
        T: Display,
    {
        match self.color {
            ColorMode::Auto => text
                .if_supports_color(Stream::Stdout, |t| style(t))
                .to_string(),
            ColorMode::Never => text.to_string(),
        }
    }

    /// Print a success message
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        let glyph = self.paint("✓", |t| t.green().to_string());
        writeln!(self.out, "{} {}", glyph, message)
    }

    /// Print an error message
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        let glyph = self.paint("✗", |t| t.red().to_string());
        writeln!(self.out, "{} {}", glyph, message)
    }

    /// Print an info message
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        let glyph = self.paint("ℹ", |t| t.blue().to_string());
        writeln!(self.out, "{} {}", glyph, message)
    }

    /// Print a header
    pub fn header(&mut self, message: &str) -> io::Result<()> {
        let title = self.paint(message, |t| t.bold().to_string());
        writeln!(self.out)?;
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", "─".repeat(message.chars().count()))
    }

    /// Start a progress line: name plus a pending marker, no newline
    pub fn pending(&mut self, name: &str) -> io::Result<()> {
        let marker = self.paint("...", |t| t.dimmed().to_string());
        write!(self.out, "  {} {} ", name, marker)?;
        self.out.flush()
    }

    /// Finish a progress line with a pass or fail glyph
    pub fn finish(&mut self, passed: bool) -> io::Result<()> {
        let glyph = if passed {
            self.paint("✓", |t| t.green().to_string())
        } else {
            self.paint("✗", |t| t.red().to_string())
        };
        writeln!(self.out, "{}", glyph)
    }

    /// Print a bold item followed by its details, each indented
    pub fn item(&mut self, name: &str, details: &[String]) -> io::Result<()> {
        let title = self.paint(name, |t| t.bold().to_string());
        writeln!(self.out, "  {}", title)?;
        for detail in details {
            for line in detail.lines() {
                writeln!(self.out, "    {}", line)?;
            }
        }
        Ok(())
    }

    /// Write raw text followed by a newline
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{}m {:.0}s", mins, remaining_secs)
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
