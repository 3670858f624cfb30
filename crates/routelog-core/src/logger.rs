//! Leveled logger routing records to the terminal or a file
//!
//! A [`Logger`] owns its enable flag, routing level, persistence flags, file
//! sink and event counter behind a single lock, so one instance can be shared
//! between threads. Reconfiguration never fails loudly: a rejected change keeps
//! the previous configuration and reports the reason on the terminal.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{LogError, LogResult};
use crate::logging::{ConsoleSink, FileSink, LogTarget, Record};
use crate::routing::{route, Sink};
use crate::types::{Level, PersistFlags, Severity};

/// Mutable part of a logger, guarded as a whole
#[derive(Debug)]
struct LoggerState {
    enabled: bool,
    level: Level,
    flags: PersistFlags,
    file: Option<FileSink>,
    console: ConsoleSink,
    count: u64,
}

impl LoggerState {
    fn new(console: ConsoleSink) -> Self {
        Self {
            enabled: true,
            level: Level::TERMINAL,
            flags: PersistFlags::default(),
            file: None,
            console,
            count: 0,
        }
    }

    fn next_count(&mut self) -> u64 {
        let count = self.count;
        self.count += 1;
        count
    }

    /// Route and write one record
    fn emit(&mut self, name: &str, severity: Severity, message: &str) -> Sink {
        match route(self.enabled, severity, &self.flags) {
            Sink::Suppressed => Sink::Suppressed,
            Sink::Terminal => self.write_terminal(name, severity, message),
            Sink::File => {
                let count = self.next_count();
                let record = Record::now(severity, name, count, message);
                let written = match self.file.as_mut() {
                    Some(file) => file.write(&record),
                    None => {
                        // Level > 0 implies an attached file
                        self.console.write(&record);
                        return Sink::Terminal;
                    }
                };
                if let Err(err) = written {
                    self.diagnose(name, &err);
                }
                Sink::File
            }
        }
    }

    /// Write to the terminal regardless of routing
    fn write_terminal(&mut self, name: &str, severity: Severity, message: &str) -> Sink {
        if !self.enabled {
            return Sink::Suppressed;
        }
        let count = self.next_count();
        self.console.write(&Record::now(severity, name, count, message));
        Sink::Terminal
    }

    /// Report a rejected operation on the terminal
    fn diagnose(&mut self, name: &str, err: &LogError) {
        self.write_terminal(name, err.severity(), &err.to_string());
    }

    /// Validate and apply a level; `Ok(false)` means it was already active
    fn apply_level(&mut self, level: LogResult<Level>) -> LogResult<bool> {
        let level = level?;
        if level == self.level {
            return Ok(false);
        }
        if level.requires_file() && self.file.is_none() {
            return Err(LogError::missing_file_target(level.value()));
        }
        self.level = level;
        self.flags = PersistFlags::for_level(level);
        Ok(true)
    }
}

/// A named, leveled logging stream
///
/// # Example
///
/// ```
/// use routelog_core::{Logger, LogTarget};
///
/// let log = Logger::new("My App");
/// log.ok("Starting script.");
/// log.info("Script is done.");
/// assert_eq!(log.event_count(), 2);
///
/// // No file attached yet, so persisting levels are refused
/// assert!(!log.set_level(2));
/// assert_eq!(log.level().value(), 0);
/// ```
pub struct Logger {
    name: String,
    state: Mutex<LoggerState>,
}

impl Logger {
    /// Create a terminal-only logger writing to stdout
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Mutex::new(LoggerState::new(ConsoleSink::stdout())),
        }
    }

    /// Create a logger and try to attach `path` as its file sink
    pub fn with_file(name: impl Into<String>, path: impl AsRef<Path>) -> Self {
        let logger = Self::new(name);
        logger.set_file(path);
        logger
    }

    /// Create a logger with an optional initial level and file path
    ///
    /// The file is attached first. If the level needs a file and none could be
    /// attached, the level is refused and the logger stays at level 0.
    pub fn with_options(name: impl Into<String>, level: Option<i64>, file_path: Option<&Path>) -> Self {
        let logger = Self::new(name);
        logger.configure(level, file_path);
        logger
    }

    /// Send terminal output to `writer` instead of stdout
    pub fn with_terminal(self, writer: impl Write + Send + 'static) -> Self {
        self.state.lock().console = ConsoleSink::with_writer(writer);
        self
    }

    /// Apply constructor arguments to a fresh logger
    pub(crate) fn configure(&self, level: Option<i64>, file_path: Option<&Path>) {
        if let Some(path) = file_path {
            self.set_file(path);
        }
        if let Some(level) = level {
            let mut state = self.state.lock();
            match state.apply_level(Level::new(level)) {
                Ok(true) => self.confirm_level(&mut state),
                Ok(false) => {}
                Err(err @ LogError::MissingFileTarget { .. }) => {
                    // Refused at construction: warn instead of failing the caller
                    state.write_terminal(&self.name, Severity::Warning, &err.to_string());
                }
                Err(err) => state.diagnose(&self.name, &err),
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_enabled(&self) -> bool {
        self.state.lock().enabled
    }

    /// Resume emitting records. Idempotent.
    pub fn enable(&self) {
        self.state.lock().enabled = true;
    }

    /// Turn every severity method into a no-op. Idempotent; level, file and
    /// counter are kept.
    pub fn disable(&self) {
        self.state.lock().enabled = false;
    }

    /// Currently active level
    pub fn level(&self) -> Level {
        self.state.lock().level
    }

    /// Persistence flags derived from the current level
    pub fn persist_flags(&self) -> PersistFlags {
        self.state.lock().flags
    }

    pub fn persists_to_file(&self, severity: Severity) -> bool {
        self.state.lock().flags.persists(severity)
    }

    /// Path of the attached file sink, if any
    pub fn file_path(&self) -> Option<PathBuf> {
        self.state.lock().file.as_ref().map(|f| f.path().to_path_buf())
    }

    /// Number of records emitted so far
    pub fn event_count(&self) -> u64 {
        self.state.lock().count
    }

    /// Change the routing level.
    ///
    /// Returns `false` and keeps the current level when `level` is outside
    /// `0..=4` or when it would persist records without an attached file.
    /// Re-requesting the active level succeeds without doing anything. On a
    /// change, the confirmation is routed with the new level.
    pub fn set_level(&self, level: i64) -> bool {
        self.change_level(Level::new(level))
    }

    /// Same as [`set_level`](Self::set_level) for textual input, which may not
    /// be an integer at all
    pub fn set_level_str(&self, level: &str) -> bool {
        self.change_level(level.parse())
    }

    fn change_level(&self, level: LogResult<Level>) -> bool {
        let mut state = self.state.lock();
        match state.apply_level(level) {
            Ok(true) => {
                self.confirm_level(&mut state);
                true
            }
            Ok(false) => true,
            Err(err) => {
                state.diagnose(&self.name, &err);
                false
            }
        }
    }

    fn confirm_level(&self, state: &mut LoggerState) {
        let message = format!("Log level set to {}.", state.level);
        state.emit(&self.name, Severity::Info, &message);
    }

    /// Attach `path` as the file sink.
    ///
    /// The file must already exist; it is opened for appending. On success the
    /// previous handle, if any, is closed. On failure nothing changes.
    pub fn set_file(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let mut state = self.state.lock();
        match FileSink::open(path) {
            Ok(sink) => {
                // Dropping the old sink closes its handle
                state.file = Some(sink);
                let message = format!("Pointing to new file path for logger: {}", path.display());
                state.emit(&self.name, Severity::Ok, &message);
                true
            }
            Err(err) => {
                state.diagnose(&self.name, &err);
                false
            }
        }
    }

    /// Emit one record and report where it went
    pub fn log(&self, severity: Severity, message: &str) -> Sink {
        self.state.lock().emit(&self.name, severity, message)
    }
}

impl LogTarget for Logger {
    fn log_at(&self, severity: Severity, message: &str) {
        self.log(severity, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("enabled", &state.enabled)
            .field("level", &state.level)
            .field("file_path", &state.file.as_ref().map(|s| s.path()))
            .field("count", &state.count)
            .finish()
    }
}
