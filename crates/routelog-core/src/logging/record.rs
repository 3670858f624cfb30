//! A single record as handed to a sink

use chrono::{DateTime, Local};

use crate::types::Severity;

/// Fields shared by both sink formats
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub timestamp: DateTime<Local>,
    pub severity: Severity,
    pub name: &'a str,
    /// Event counter value at the time of emission
    pub count: u64,
    pub message: &'a str,
}

impl<'a> Record<'a> {
    /// Stamp a record with the current wall-clock time
    pub fn now(severity: Severity, name: &'a str, count: u64, message: &'a str) -> Self {
        Self {
            timestamp: Local::now(),
            severity,
            name,
            count,
            message,
        }
    }

    /// Timestamp as rendered in both sinks, microsecond precision
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }
}
