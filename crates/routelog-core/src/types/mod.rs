//! Core types for leveled routing
//!
//! This module contains the severity, level and persistence-flag types shared
//! by the router, the sinks and the logger.

mod severity;
mod level;

pub use severity::Severity;
pub use level::{Level, PersistFlags};
