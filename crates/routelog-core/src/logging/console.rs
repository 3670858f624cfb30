//! Terminal sink: colorized single-line records

use std::fmt;
use std::io::{self, Write};

use super::record::Record;
use crate::types::Severity;

/// ANSI escape codes used by the terminal sink
pub mod ansi {
    pub const BLUE: &str = "\x1b[94m";
    pub const CYAN: &str = "\x1b[96m";
    pub const YELLOW: &str = "\x1b[93m";
    pub const RED: &str = "\x1b[91m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color and style pair for a severity header
pub fn palette(severity: Severity) -> (&'static str, &'static str) {
    match severity {
        Severity::Ok => (ansi::BLUE, ansi::BOLD),
        Severity::Info => (ansi::CYAN, ansi::BOLD),
        Severity::Warning => (ansi::YELLOW, ansi::BOLD),
        Severity::Error | Severity::Critical => (ansi::RED, ansi::BOLD),
    }
}

/// Writes records to the terminal (stdout by default)
pub struct ConsoleSink {
    writer: Box<dyn Write + Send>,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl ConsoleSink {
    /// Console sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Console sink writing to any writer (a captured buffer in tests)
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }

    /// Render a record as a colorized line, without the trailing newline
    pub fn render(record: &Record<'_>) -> String {
        let (color, style) = palette(record.severity);
        format!(
            "[{}] [{}{}{}{}] [{}] [{}] - {}",
            record.timestamp_str(),
            color,
            style,
            record.severity.header(),
            ansi::RESET,
            record.name,
            record.count,
            record.message
        )
    }

    /// Write a record. Terminal failures are ignored.
    pub fn write(&mut self, record: &Record<'_>) {
        let line = Self::render(record);
        let _ = writeln!(self.writer, "{}", line);
        let _ = self.writer.flush();
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}
