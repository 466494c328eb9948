//! Process-wide default logger
//!
//! A lazily created logger with the out-of-the-box configuration, for ambient
//! convenience logging without constructing anything. Initialization is
//! race-safe; there is no teardown.
//!
//! ```
//! logpipe::warn("ambient warning, no setup required");
//! logpipe::default_logger().set_level(logpipe::LogLevel::Info);
//! logpipe::info("now visible");
//! # logpipe::default_logger().set_level(logpipe::LogLevel::Warning);
//! ```

use crate::core::{LogLevel, Logger};
use std::sync::OnceLock;

static DEFAULT: OnceLock<Logger> = OnceLock::new();

/// The process-wide default logger, created on first access.
///
/// Configuration setters take `&self`, so the returned reference is enough to
/// reconfigure it: `default_logger().set_level(LogLevel::Debug)`.
pub fn default_logger() -> &'static Logger {
    DEFAULT.get_or_init(Logger::new)
}

/// Log a message against the default logger.
pub fn log(level: LogLevel, message: impl Into<String>) {
    default_logger().log(level, message);
}

/// Log a trace message against the default logger.
pub fn trace(message: impl Into<String>) {
    default_logger().trace(message);
}

/// Log a debug message against the default logger.
pub fn debug(message: impl Into<String>) {
    default_logger().debug(message);
}

/// Log an info message against the default logger.
pub fn info(message: impl Into<String>) {
    default_logger().info(message);
}

/// Log a warning message against the default logger.
pub fn warn(message: impl Into<String>) {
    default_logger().warn(message);
}

/// Log an error message against the default logger.
pub fn error(message: impl Into<String>) {
    default_logger().error(message);
}

/// Log a fatal message against the default logger.
pub fn fatal(message: impl Into<String>) {
    default_logger().fatal(message);
}
