//! routelog core
//!
//! Leveled logging that routes each record either to the terminal (colorized,
//! ephemeral) or to an append-only file (plain, durable), depending on the
//! logger's level.
//!
//! ## Routing
//!
//! Level 0 keeps everything on the terminal; level 4 persists everything.
//! In between, the most important severities go to the file first:
//! CRITICAL from level 1, ERROR from 2, WARNING from 3, INFO and OK at 4.
//! Raising the level above 0 requires an attached file, and the file must
//! already exist.
//!
//! ```rust,no_run
//! use routelog_core::{scoped, Logger, LogTarget};
//!
//! let log = Logger::with_file("Admin Log", "example.log");
//! log.set_level(3);
//!
//! scoped(&log, |log| {
//!     log.info("stays on the terminal");
//!     log.warning("stored in example.log");
//! });
//! ```

pub mod types;
pub mod error;
pub mod routing;
pub mod logging;
pub mod logger;
pub mod scope;
pub mod registry;
pub mod config;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use types::{Level, PersistFlags, Severity};

pub use error::{LogError, LogResult};

pub use routing::{route, Sink};

pub use logging::{LogTarget, LogTargetExt, NoOpLogger, SharedLogTarget};

pub use logger::Logger;

pub use scope::scoped;

pub use registry::LoggerRegistry;

pub use config::{LoggerConfig, LoggingConfig};
