//! Logger configuration embedded in host configuration (YAML)
//!
//! The logger never reads configuration on its own. Hosts that keep logger
//! settings in their config files parse them into these types and build
//! loggers from them; every value still goes through the usual validation.

use std::io::Write;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{LogError, LogResult};
use crate::logger::Logger;
use crate::registry::LoggerRegistry;

fn default_enabled() -> bool {
    true
}

/// Constructor arguments for one logger
///
/// ```yaml
/// name: Admin Log
/// level: 3
/// file_path: /var/log/admin.log
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Logger name, shown in every line
    pub name: String,
    /// Initial routing level (0-4)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    /// Existing file to append persisted records to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,
    /// Start enabled (default) or disabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl LoggerConfig {
    /// Configuration for a terminal-only, enabled logger
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: None,
            file_path: None,
            enabled: true,
        }
    }

    /// Set the initial level
    pub fn with_level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the file path
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Set whether the logger starts enabled
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Parse a single logger configuration from YAML
    pub fn from_yaml_str(yaml: &str) -> LogResult<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| LogError::Config(format!("Failed to parse YAML: {}", e)))
    }

    /// Serialize to YAML
    pub fn to_yaml_string(&self) -> LogResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| LogError::Config(format!("Failed to serialize YAML: {}", e)))
    }

    /// Build a logger writing its terminal output to stdout
    pub fn build(self) -> Logger {
        let logger = Logger::new(self.name.clone());
        self.build_into(logger)
    }

    /// Build a logger writing its terminal output to `writer`
    pub fn build_with_terminal(self, writer: impl Write + Send + 'static) -> Logger {
        let logger = Logger::new(self.name.clone()).with_terminal(writer);
        self.build_into(logger)
    }

    fn build_into(self, logger: Logger) -> Logger {
        // A disabled logger stays silent while it is being configured
        if !self.enabled {
            logger.disable();
        }
        logger.configure(self.level, self.file_path.as_deref());
        logger
    }
}

/// A set of loggers, as found under a `logging:` key of a host config
///
/// ```yaml
/// loggers:
///   - name: app
///   - name: audit
///     level: 2
///     file_path: audit.log
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub loggers: Vec<LoggerConfig>,
}

impl LoggingConfig {
    /// Parse a logging section from YAML
    pub fn from_yaml_str(yaml: &str) -> LogResult<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| LogError::Config(format!("Failed to parse YAML: {}", e)))
    }

    /// Build every configured logger into a fresh registry
    pub fn build_registry(self) -> LoggerRegistry {
        let registry = LoggerRegistry::new();
        for config in self.loggers {
            registry.register_config(config);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Capture;
    use crate::types::Level;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_minimal() {
        let config = LoggerConfig::from_yaml_str("name: My App").unwrap();
        assert_eq!(config, LoggerConfig::new("My App"));
        assert!(config.enabled);
    }

    #[test]
    fn test_parse_full() {
        let yaml = "name: Admin Log\nlevel: 3\nfile_path: example.log\nenabled: false\n";
        let config = LoggerConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.level, Some(3));
        assert_eq!(config.file_path, Some(PathBuf::from("example.log")));
        assert!(!config.enabled);
    }

    #[test]
    fn test_parse_non_integer_level() {
        let err = LoggerConfig::from_yaml_str("name: x\nlevel: a\n").unwrap_err();
        assert!(matches!(err, LogError::Config(_)));
    }

    #[test]
    fn test_yaml_roundtrip_skips_unset_fields() {
        let yaml = LoggerConfig::new("app").to_yaml_string().unwrap();
        assert!(!yaml.contains("level"));
        assert!(!yaml.contains("file_path"));
        assert_eq!(LoggerConfig::from_yaml_str(&yaml).unwrap(), LoggerConfig::new("app"));
    }

    #[test]
    fn test_build_applies_file_and_level() {
        let tmp = NamedTempFile::new().unwrap();
        let logger = LoggerConfig::new("audit")
            .with_file_path(tmp.path())
            .with_level(4)
            .build_with_terminal(Capture::new());

        assert_eq!(logger.level().value(), 4);
        assert_eq!(logger.file_path().as_deref(), Some(tmp.path()));
    }

    #[test]
    fn test_build_out_of_range_level_degrades() {
        let capture = Capture::new();
        let logger = LoggerConfig::new("app").with_level(7).build_with_terminal(capture.clone());

        assert_eq!(logger.level(), Level::TERMINAL);
        assert!(capture.contents().contains("WARNING"));
    }

    #[test]
    fn test_build_level_without_file_warns() {
        let capture = Capture::new();
        let logger = LoggerConfig::new("app").with_level(2).build_with_terminal(capture.clone());

        assert_eq!(logger.level(), Level::TERMINAL);
        let lines = capture.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("WARNING"));
    }

    #[test]
    fn test_build_disabled_is_silent() {
        let capture = Capture::new();
        let logger = LoggerConfig::new("quiet")
            .with_level(9)
            .with_enabled(false)
            .build_with_terminal(capture.clone());

        assert!(!logger.is_enabled());
        assert!(capture.lines().is_empty());
        assert_eq!(logger.event_count(), 0);
    }

    #[test]
    fn test_logging_config_registry() {
        let yaml = "loggers:\n  - name: app\n  - name: worker\n    enabled: false\n";
        let registry = LoggingConfig::from_yaml_str(yaml).unwrap().build_registry();

        assert_eq!(registry.names(), vec!["app".to_string(), "worker".to_string()]);
        assert!(!registry.get("worker").unwrap().is_enabled());
        assert!(LoggingConfig::from_yaml_str("{}").unwrap().loggers.is_empty());
    }
}
