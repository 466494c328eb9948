//! MessageWriter capability for output sinks

use super::{error::Result, log_level::LogLevel};

/// The pluggable sink capability: one side-effecting operation taking the
/// already-formatted line and its level. Implementations own their sink
/// resource (stdout, a file handle, a socket) and its lifecycle.
///
/// Errors returned here are reported by the logger on stderr; they never reach
/// the original log call site.
pub trait MessageWriter: Send + Sync {
    fn write(&mut self, text: &str, level: LogLevel) -> Result<()>;
}
