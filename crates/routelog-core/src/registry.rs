//! Registry for looking loggers up by name
//!
//! There is no process-wide registry. Code that needs lookup by name holds a
//! [`LoggerRegistry`] and passes it (or an `Arc` of it) to whoever needs it.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::LoggerConfig;
use crate::logger::Logger;

/// Named collection of shared loggers
#[derive(Debug, Default)]
pub struct LoggerRegistry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a logger under its own name
    ///
    /// Returns the logger previously registered under that name, if any.
    pub fn register(&self, logger: Logger) -> Option<Arc<Logger>> {
        self.register_shared(Arc::new(logger))
    }

    /// Register an already shared logger
    pub fn register_shared(&self, logger: Arc<Logger>) -> Option<Arc<Logger>> {
        let mut loggers = self.loggers.write();
        loggers.insert(logger.name().to_string(), logger)
    }

    /// Build a logger from configuration and register it
    pub fn register_config(&self, config: LoggerConfig) -> Arc<Logger> {
        let logger = Arc::new(config.build());
        self.register_shared(Arc::clone(&logger));
        logger
    }

    /// Get a logger by name
    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        let loggers = self.loggers.read();
        loggers.get(name).cloned()
    }

    /// Get a logger by name, creating a terminal-only one if missing
    pub fn get_or_create(&self, name: &str) -> Arc<Logger> {
        if let Some(logger) = self.get(name) {
            return logger;
        }
        let mut loggers = self.loggers.write();
        Arc::clone(
            loggers
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Logger::new(name))),
        )
    }

    /// Check if a logger is registered
    pub fn contains(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    /// Remove a logger; its file handle closes once the last `Arc` is gone
    pub fn remove(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers.write().remove(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Disable every registered logger
    pub fn disable_all(&self) {
        for logger in self.loggers.read().values() {
            logger.disable();
        }
    }

    /// Enable every registered logger
    pub fn enable_all(&self) {
        for logger in self.loggers.read().values() {
            logger.enable();
        }
    }
}
