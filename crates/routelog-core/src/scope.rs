//! Scoped use of a log target
//!
//! [`scoped`] brackets a block with an opening and a closing INFO record. The
//! closing record is written on every way out of the block: normal return,
//! an early `return` or `?` inside the closure, or a panic, which is resumed
//! afterwards.

use std::panic::{self, AssertUnwindSafe};

use crate::logging::LogTarget;

pub const OPENING_MESSAGE: &str = "Opening logger.";
pub const CLOSING_MESSAGE: &str = "Closing logger.";

/// Run `body` between an opening and a closing record on `target`
///
/// # Example
///
/// ```
/// use routelog_core::{scoped, Logger, LogTarget};
///
/// let log = Logger::new("Admin Log");
/// let answer = scoped(&log, |log| {
///     log.info("inside the scope");
///     42
/// });
/// assert_eq!(answer, 42);
/// assert_eq!(log.event_count(), 3);
/// ```
pub fn scoped<T, R, F>(target: &T, body: F) -> R
where
    T: LogTarget + ?Sized,
    F: FnOnce(&T) -> R,
{
    target.info(OPENING_MESSAGE);
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| body(target)));
    target.info(CLOSING_MESSAGE);
    match outcome {
        Ok(value) => value,
        Err(payload) => panic::resume_unwind(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NoOpLogger;
    use crate::test_support::Capture;
    use crate::Logger;

    fn captured() -> (Logger, Capture) {
        let capture = Capture::new();
        (Logger::new("Scope").with_terminal(capture.clone()), capture)
    }

    #[test]
    fn test_opening_and_closing_pair() {
        let (log, capture) = captured();
        scoped(&log, |log| log.ok("work"));

        let lines = capture.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(OPENING_MESSAGE));
        assert!(lines[1].ends_with("- work"));
        assert!(lines[2].ends_with(CLOSING_MESSAGE));
    }

    #[test]
    fn test_closing_on_error_result() {
        let (log, capture) = captured();
        let should_fail = true;
        let result: Result<(), String> = scoped(&log, |log| {
            log.warning("about to fail");
            if should_fail {
                return Err("failed".to_string());
            }
            log.info("never reached");
            Ok(())
        });

        assert!(result.is_err());
        let lines = capture.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].ends_with(CLOSING_MESSAGE));
    }

    #[test]
    fn test_closing_on_panic() {
        let (log, capture) = captured();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            scoped(&log, |_| panic!("boom"));
        }));

        assert!(outcome.is_err());
        let lines = capture.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with(CLOSING_MESSAGE));
    }

    #[test]
    fn test_disabled_logger_scope_is_silent() {
        let (log, capture) = captured();
        log.disable();
        scoped(&log, |log| log.info("hidden"));
        assert!(capture.lines().is_empty());
        assert_eq!(log.event_count(), 0);
    }

    #[test]
    fn test_scope_over_noop() {
        assert_eq!(scoped(&NoOpLogger::new(), |_| 7), 7);
    }
}
