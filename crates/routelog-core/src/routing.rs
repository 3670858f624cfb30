//! Routing policy: which sink receives a record

use crate::types::{PersistFlags, Severity};

/// Destination chosen for a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    /// Colorized line on the terminal
    Terminal,
    /// Plain line appended to the attached file
    File,
    /// Logger disabled, nothing written
    Suppressed,
}

/// Pick the sink for a record.
///
/// A disabled logger suppresses everything. Otherwise routing only redirects:
/// every record reaches exactly one sink.
pub fn route(enabled: bool, severity: Severity, flags: &PersistFlags) -> Sink {
    if !enabled {
        Sink::Suppressed
    } else if flags.persists(severity) {
        Sink::File
    } else {
        Sink::Terminal
    }
}
