//! Routing level and the persistence flags derived from it

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::severity::Severity;
use crate::error::LogError;

/// Routing level in `0..=Level::MAX`
///
/// Level 0 keeps everything on the terminal. Each step up sends one more
/// severity band to the file sink, until level 4 persists every record:
///
/// | level | OK | INFO | WARNING | ERROR | CRITICAL |
/// |---|---|---|---|---|---|
/// | 0 | term | term | term | term | term |
/// | 1 | term | term | term | term | file |
/// | 2 | term | term | term | file | file |
/// | 3 | term | term | file | file | file |
/// | 4 | file | file | file | file | file |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Level(u8);

impl Level {
    /// Highest accepted level
    pub const MAX: u8 = 4;

    /// Terminal only
    pub const TERMINAL: Level = Level(0);

    /// Create a level, rejecting values outside `0..=MAX`
    pub fn new(value: i64) -> Result<Self, LogError> {
        if (0..=i64::from(Self::MAX)).contains(&value) {
            Ok(Level(value as u8))
        } else {
            Err(LogError::InvalidLevel(value.to_string()))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Whether this level sends at least one severity to the file sink
    pub fn requires_file(&self) -> bool {
        self.0 > 0
    }
}

impl TryFrom<i64> for Level {
    type Error = LogError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Level::new(value)
    }
}

impl From<Level> for i64 {
    fn from(level: Level) -> Self {
        i64::from(level.0)
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| LogError::InvalidLevel(s.to_string()))?;
        Level::new(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which severities a level sends to the file sink
///
/// Only obtainable from a [`Level`], so the flags can never drift from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersistFlags([bool; 5]);

impl PersistFlags {
    pub fn for_level(level: Level) -> Self {
        let mut flags = [false; 5];
        for severity in Severity::ALL {
            flags[severity.index()] = level.value() >= severity.file_threshold();
        }
        PersistFlags(flags)
    }

    /// True if records of `severity` go to the file sink
    pub fn persists(&self, severity: Severity) -> bool {
        self.0[severity.index()]
    }
}
