//! Log target trait definition

use std::sync::Arc;

use crate::types::Severity;

/// Anything that accepts records at the five severities
///
/// Implementations:
/// - `Logger`: routes each record to the terminal or the attached file
/// - `NoOpLogger`: discards everything
pub trait LogTarget: Send + Sync {
    /// Log a record at the given severity
    fn log_at(&self, severity: Severity, message: &str);

    /// Log an OK message
    fn ok(&self, message: &str) {
        self.log_at(Severity::Ok, message);
    }

    /// Log an info message
    fn info(&self, message: &str) {
        self.log_at(Severity::Info, message);
    }

    /// Log a warning message
    fn warning(&self, message: &str) {
        self.log_at(Severity::Warning, message);
    }

    /// Log an error message
    fn error(&self, message: &str) {
        self.log_at(Severity::Error, message);
    }

    /// Log a critical message
    fn critical(&self, message: &str) {
        self.log_at(Severity::Critical, message);
    }
}

/// Type alias for an Arc-wrapped target
pub type SharedLogTarget = Arc<dyn LogTarget>;

impl<T: LogTarget + ?Sized> LogTarget for Arc<T> {
    fn log_at(&self, severity: Severity, message: &str) {
        (**self).log_at(severity, message);
    }
}

impl<T: LogTarget + ?Sized> LogTarget for &T {
    fn log_at(&self, severity: Severity, message: &str) {
        (**self).log_at(severity, message);
    }
}

/// Extension trait for logging with format arguments
pub trait LogTargetExt: LogTarget {
    /// Log at any severity with format arguments
    fn log_fmt(&self, severity: Severity, args: std::fmt::Arguments<'_>) {
        self.log_at(severity, &args.to_string());
    }
}

impl<T: LogTarget + ?Sized> LogTargetExt for T {}

/// Convenience macros for logging
#[macro_export]
macro_rules! log_ok {
    ($target:expr, $($arg:tt)*) => {
        $crate::logging::LogTargetExt::log_fmt(&$target, $crate::types::Severity::Ok, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($target:expr, $($arg:tt)*) => {
        $crate::logging::LogTargetExt::log_fmt(&$target, $crate::types::Severity::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($target:expr, $($arg:tt)*) => {
        $crate::logging::LogTargetExt::log_fmt(&$target, $crate::types::Severity::Warning, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($target:expr, $($arg:tt)*) => {
        $crate::logging::LogTargetExt::log_fmt(&$target, $crate::types::Severity::Error, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_critical {
    ($target:expr, $($arg:tt)*) => {
        $crate::logging::LogTargetExt::log_fmt(&$target, $crate::types::Severity::Critical, format_args!($($arg)*))
    };
}
