//! No-op log target

use super::traits::LogTarget;
use crate::types::Severity;

/// A target that discards every record
///
/// Useful for testing or when a component takes a target but logging is not
/// wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    pub fn new() -> Self {
        Self
    }
}

impl LogTarget for NoOpLogger {
    fn log_at(&self, _severity: Severity, _message: &str) {}
}
