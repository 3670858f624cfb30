//! Error types for logger reconfiguration

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::Severity;

/// Errors that can occur while reconfiguring a logger
///
/// None of these ever reach the host application as a failure: the logger
/// reports them on its terminal sink and keeps its previous configuration.
#[derive(Error, Debug)]
pub enum LogError {
    /// Level is not an integer or lies outside the accepted range
    #[error("Specified level {0} is not a valid range. Levels go from 0 to 4.")]
    InvalidLevel(String),

    /// A level that persists records was requested without a file target
    #[error("No file path has been specified for this log. Use set_file(path) before raising the level to {level}.")]
    MissingFileTarget { level: u8 },

    /// No path was provided at all
    #[error("No file path has been specified for this log.")]
    NoFilePath,

    /// Path does not name an existing regular file
    #[error("The specified file path {} is not an existing file. Please create it to set the new log path.", .0.display())]
    FileNotFound(PathBuf),

    /// Opening or writing the file failed
    #[error("An error occurred while using the log file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Logger configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LogError {
    /// Create an I/O error for a file target
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a missing file target error
    pub fn missing_file_target(level: u8) -> Self {
        Self::MissingFileTarget { level }
    }

    /// Severity used when this error is reported on the terminal
    pub fn severity(&self) -> Severity {
        match self {
            LogError::InvalidLevel(_) | LogError::NoFilePath => Severity::Warning,
            LogError::MissingFileTarget { .. }
            | LogError::FileNotFound(_)
            | LogError::Io { .. }
            | LogError::Config(_) => Severity::Error,
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_severity() {
        assert_eq!(LogError::InvalidLevel("9".into()).severity(), Severity::Warning);
        assert_eq!(LogError::NoFilePath.severity(), Severity::Warning);
        assert_eq!(LogError::missing_file_target(2).severity(), Severity::Error);
        assert_eq!(LogError::FileNotFound("x.log".into()).severity(), Severity::Error);
    }

    #[test]
    fn test_messages() {
        let err = LogError::InvalidLevel("33".into());
        assert!(err.to_string().contains("33"));

        let err = LogError::io(
            "app.log",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("app.log"));
        assert!(msg.contains("denied"));
    }
}
