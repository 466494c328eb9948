//! Core logger types and traits

pub mod error;
pub mod log_level;
pub mod logger;
pub mod payload;
pub mod timestamp;
pub mod writer;

pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use payload::{current_context_name, default_formatter, Formatter, FormatterPayload};
pub use timestamp::{TimestampGenerator, DEFAULT_TIMESTAMP_PATTERN};
pub use writer::MessageWriter;
