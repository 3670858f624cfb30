//! Log targets and the two sinks records are rendered into

mod traits;
mod noop;
mod record;
pub mod console;
pub mod file_logger;

pub use traits::{LogTarget, LogTargetExt, SharedLogTarget};
pub use noop::NoOpLogger;
pub use record::Record;
pub use console::ConsoleSink;
pub use file_logger::FileSink;
