//! Record severities

use std::fmt;

/// Severity of a single log record, ordered by increasing importance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// A process executed as expected
    Ok,
    /// Notification for whoever reads the log
    Info,
    /// Unexpected but recoverable situation
    Warning,
    /// Failure while handling some request
    Error,
    /// Failure the application may not survive
    Critical,
}

impl Severity {
    /// All severities, lowest first
    pub const ALL: [Severity; 5] = [
        Severity::Ok,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// Header text written between brackets in every rendered line
    pub fn header(&self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Lowest level at which records of this severity go to the file sink
    pub fn file_threshold(&self) -> u8 {
        match self {
            Severity::Critical => 1,
            Severity::Error => 2,
            Severity::Warning => 3,
            Severity::Info | Severity::Ok => 4,
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}
