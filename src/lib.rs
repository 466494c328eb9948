//! # Logpipe
//!
//! A lightweight, configurable logging pipeline: callers emit leveled
//! messages, the library timestamps and formats them, and dispatches the
//! resulting line to a pluggable writer.
//!
//! ## Features
//!
//! - **Level gate**: ordered severities from `Trace` to `Fatal`, with `Off`
//!   as a suppress-everything threshold
//! - **Pluggable pipeline**: user-supplied formatter functions and
//!   [`MessageWriter`] sinks; ANSI-aware console and append-mode file writers
//!   included
//! - **Optional async dispatch**: fire-and-forget handoff of writes to a
//!   background thread
//! - **Ambient logging**: a lazily created process-wide default logger
//!
//! ## Quick start
//!
//! ```
//! use logpipe::{Logger, LogLevel};
//!
//! let logger = Logger::new();
//! logger.set_level(LogLevel::Info);
//! logger.info("ready");
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        default_formatter, Formatter, FormatterPayload, LogLevel, Logger, LoggerBuilder,
        LoggerError, MessageWriter, Result, TimestampGenerator, DEFAULT_TIMESTAMP_PATTERN,
    };
    pub use crate::writers::{ConsoleWriter, FileWriter};
}

pub use crate::core::{
    current_context_name, default_formatter, Formatter, FormatterPayload, LogLevel, Logger,
    LoggerBuilder, LoggerError, MessageWriter, Result, TimestampGenerator,
    DEFAULT_TIMESTAMP_PATTERN,
};
pub use global::{debug, default_logger, error, fatal, info, log, trace, warn};
pub use writers::{ConsoleWriter, FileWriter};
