//! Logger configuration
//!
//! - `LoggerConfig`: constructor arguments for one logger
//! - `LoggingConfig`: a list of them, built into a `LoggerRegistry`

mod file;

pub use file::{LoggerConfig, LoggingConfig};
