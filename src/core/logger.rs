//! Main logger implementation

use super::{
    log_level::LogLevel,
    payload::{current_context_name, default_formatter, Formatter, FormatterPayload},
    timestamp::TimestampGenerator,
    writer::MessageWriter,
};
use crate::writers::ConsoleWriter;
use crossbeam_channel::{unbounded, Sender};
use parking_lot::RwLock;
use std::sync::Arc;
use std::thread;

/// One formatted line queued for the background writer thread.
struct WriteJob {
    text: String,
    level: LogLevel,
}

/// The logging pipeline: level gate, payload construction, formatting, and
/// dispatch to the configured writer.
///
/// All configuration is behind per-field locks so a shared (or process-wide)
/// logger can be reconfigured through `&self` while other threads are logging.
/// A log call that races a setter observes the old or the new value of each
/// field, never a torn one.
///
/// # Example
/// ```
/// use logpipe::{Logger, LogLevel};
///
/// let logger = Logger::new();
/// logger.set_level(LogLevel::Info);
/// logger.info("pipeline ready");
/// logger.debug("not emitted: below the minimum level");
/// ```
pub struct Logger {
    timestamps: TimestampGenerator,
    min_level: RwLock<LogLevel>,
    formatter: RwLock<Formatter>,
    writer: Arc<RwLock<Box<dyn MessageWriter>>>,
    /// Present iff async mode is on. Dropping it disconnects the channel and
    /// lets the worker thread drain and exit.
    sender: RwLock<Option<Sender<WriteJob>>>,
}

impl Logger {
    /// Create a logger with the out-of-the-box configuration: minimum level
    /// `Warning`, default timestamp pattern, synchronous dispatch, console
    /// writer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timestamps: TimestampGenerator::new(),
            min_level: RwLock::new(LogLevel::Warning),
            formatter: RwLock::new(default_formatter()),
            writer: Arc::new(RwLock::new(Box::new(ConsoleWriter::new()))),
            sender: RwLock::new(None),
        }
    }

    /// Set the minimum level a message must meet to reach the writer.
    /// `LogLevel::Off` suppresses everything.
    pub fn set_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    /// Current minimum level.
    pub fn level(&self) -> LogLevel {
        *self.min_level.read()
    }

    /// Set the strftime pattern used for payload timestamps. Applies to
    /// subsequent calls only; already-dispatched lines keep their format.
    pub fn set_timestamp_pattern(&self, pattern: impl Into<String>) {
        self.timestamps.set_pattern(pattern);
    }

    /// Current timestamp pattern.
    pub fn timestamp_pattern(&self) -> String {
        self.timestamps.pattern()
    }

    /// Replace the formatter function.
    pub fn set_formatter<F>(&self, formatter: F)
    where
        F: Fn(&FormatterPayload) -> String + Send + Sync + 'static,
    {
        *self.formatter.write() = Arc::new(formatter);
    }

    /// Replace the writer. The swap also applies to writes still queued in
    /// async mode, since the worker resolves the writer per job.
    pub fn set_writer(&self, writer: impl MessageWriter + 'static) {
        *self.writer.write() = Box::new(writer);
    }

    /// Toggle asynchronous dispatch.
    ///
    /// When enabled, each `log` call hands its formatted line to a background
    /// writer thread and returns without waiting for the write. Submission is
    /// fire-and-forget: lines still queued at abrupt process exit are lost.
    /// Disabling reverts to synchronous writes on the calling thread; the
    /// worker drains its remaining queue and exits on its own.
    pub fn set_async(&self, enabled: bool) {
        let mut sender = self.sender.write();
        if !enabled {
            *sender = None;
            return;
        }
        if sender.is_some() {
            return;
        }

        let (tx, rx) = unbounded::<WriteJob>();
        let writer = Arc::clone(&self.writer);
        thread::spawn(move || {
            while let Ok(job) = rx.recv() {
                let mut writer = writer.write();
                if let Err(e) = writer.write(&job.text, job.level) {
                    eprintln!("[LOGPIPE ERROR] deferred write failed: {}", e);
                }
            }
        });
        *sender = Some(tx);
    }

    /// Whether async dispatch is currently enabled.
    pub fn is_async(&self) -> bool {
        self.sender.read().is_some()
    }

    /// Log a message at the given level.
    ///
    /// The message reaches the writer iff `level >= minimum_level` and the
    /// minimum level is not `Off`; a call made with `Off` itself is a no-op.
    /// Timestamp or writer failures are reported on stderr and never surface
    /// here: logging is best-effort infrastructure.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !level.is_message_level() {
            return;
        }
        let min_level = *self.min_level.read();
        if min_level == LogLevel::Off || level < min_level {
            return;
        }

        let timestamp = match self.timestamps.generate() {
            Ok(timestamp) => timestamp,
            Err(e) => {
                eprintln!("[LOGPIPE ERROR] timestamp generation failed: {}", e);
                return;
            }
        };

        let payload = FormatterPayload::new(timestamp, current_context_name(), level, message.into());
        // Clone the Arc out of the lock so user formatter code never runs
        // while the configuration lock is held.
        let formatter = self.formatter.read().clone();
        let text = formatter(&payload);

        self.dispatch(text, level);
    }

    fn dispatch(&self, text: String, level: LogLevel) {
        let sender = self.sender.read().clone();
        let job = WriteJob { text, level };
        let job = if let Some(sender) = sender {
            match sender.send(job) {
                Ok(()) => return,
                // Worker gone; fall back to a synchronous write.
                Err(e) => e.into_inner(),
            }
        } else {
            job
        };

        let mut writer = self.writer.write();
        if let Err(e) = writer.write(&job.text, job.level) {
            eprintln!("[LOGPIPE ERROR] writer failed: {}", e);
        }
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use logpipe::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Debug)
    ///     .async_mode(true)
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use logpipe::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Trace)
///     .timestamp_pattern("%H:%M:%S")
///     .writer(ConsoleWriter::with_colors(false))
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    timestamp_pattern: Option<String>,
    async_mode: bool,
    formatter: Option<Formatter>,
    writer: Option<Box<dyn MessageWriter>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Warning,
            timestamp_pattern: None,
            async_mode: false,
            formatter: None,
            writer: None,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the timestamp pattern
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.timestamp_pattern = Some(pattern.into());
        self
    }

    /// Enable or disable asynchronous dispatch
    #[must_use = "builder methods return a new value"]
    pub fn async_mode(mut self, enabled: bool) -> Self {
        self.async_mode = enabled;
        self
    }

    /// Set the formatter function
    #[must_use = "builder methods return a new value"]
    pub fn formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&FormatterPayload) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Set the writer
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: MessageWriter + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let logger = Logger::new();
        logger.set_level(self.min_level);
        if let Some(pattern) = self.timestamp_pattern {
            logger.set_timestamp_pattern(pattern);
        }
        if let Some(formatter) = self.formatter {
            *logger.formatter.write() = formatter;
        }
        if let Some(writer) = self.writer {
            *logger.writer.write() = writer;
        }
        if self.async_mode {
            logger.set_async(true);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
