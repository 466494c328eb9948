//! Integration tests for the logging pipeline
//!
//! These tests verify:
//! - Level gating, including the OFF sentinel
//! - Formatter and writer plug-in points
//! - Timestamp pattern reconfiguration between calls
//! - Non-blocking async dispatch
//! - File writer output

use logpipe::writers::FileWriter;
use logpipe::{FormatterPayload, LogLevel, Logger, MessageWriter, Result};
use parking_lot::Mutex;
use std::fs;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Writer that records every invocation for assertions.
#[derive(Clone, Default)]
struct CaptureWriter {
    lines: Arc<Mutex<Vec<(String, LogLevel)>>>,
}

impl CaptureWriter {
    fn lines(&self) -> Vec<(String, LogLevel)> {
        self.lines.lock().clone()
    }
}

impl MessageWriter for CaptureWriter {
    fn write(&mut self, text: &str, level: LogLevel) -> Result<()> {
        self.lines.lock().push((text.to_string(), level));
        Ok(())
    }
}

/// Writer that stalls in `write`, to observe dispatch latency.
struct SlowWriter {
    delay: Duration,
    inner: CaptureWriter,
}

impl MessageWriter for SlowWriter {
    fn write(&mut self, text: &str, level: LogLevel) -> Result<()> {
        std::thread::sleep(self.delay);
        self.inner.write(text, level)
    }
}

#[test]
fn test_levels_below_minimum_never_reach_the_writer() {
    let capture = CaptureWriter::default();
    let logger = Logger::builder()
        .min_level(LogLevel::Warning)
        .writer(capture.clone())
        .build();

    logger.trace("suppressed");
    logger.debug("suppressed");
    logger.info("suppressed");

    assert!(capture.lines().is_empty());
}

#[test]
fn test_levels_at_or_above_minimum_produce_exactly_one_write() {
    let capture = CaptureWriter::default();
    let logger = Logger::builder()
        .min_level(LogLevel::Warning)
        .formatter(|payload| format!("{}: {}", payload.level, payload.message))
        .writer(capture.clone())
        .build();

    logger.warn("at threshold");
    logger.error("above threshold");
    logger.fatal("well above threshold");

    let lines = capture.lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], ("WARNING: at threshold".to_string(), LogLevel::Warning));
    assert_eq!(lines[1], ("ERROR: above threshold".to_string(), LogLevel::Error));
    assert_eq!(lines[2], ("FATAL: well above threshold".to_string(), LogLevel::Fatal));
}

#[test]
fn test_off_suppresses_every_level_including_fatal() {
    let capture = CaptureWriter::default();
    let logger = Logger::builder()
        .min_level(LogLevel::Off)
        .writer(capture.clone())
        .build();

    logger.trace("suppressed");
    logger.warn("suppressed");
    logger.fatal("suppressed");
    logger.log(LogLevel::Off, "suppressed");

    assert!(capture.lines().is_empty());
}

#[test]
fn test_default_formatter_line_shape() {
    // The formatter itself, applied to a fixed payload.
    let payload = FormatterPayload::new("2024-01-01 00:00:00", "main", LogLevel::Info, "hello");
    let formatter = logpipe::default_formatter();
    assert_eq!(formatter(&payload), "2024-01-01 00:00:00 [main] INFO: hello");
}

#[test]
fn test_default_formatter_through_the_pipeline() {
    let capture = CaptureWriter::default();
    let logger = Logger::builder()
        .min_level(LogLevel::Info)
        .writer(capture.clone())
        .build();

    logger.info("hello");

    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    let text = &lines[0].0;
    // "<yyyy-mm-dd HH:MM:SS> [<context>] INFO: hello"
    assert_eq!(&text[4..5], "-");
    assert_eq!(&text[7..8], "-");
    assert_eq!(&text[10..11], " ");
    assert!(text.contains("] INFO: hello"), "unexpected line: {}", text);
}

#[test]
fn test_pattern_change_applies_only_to_subsequent_calls() {
    let capture = CaptureWriter::default();
    let logger = Logger::builder()
        .min_level(LogLevel::Trace)
        .formatter(|payload| payload.timestamp.clone())
        .writer(capture.clone())
        .build();

    logger.set_timestamp_pattern("%Y-%m-%d");
    logger.info("first");
    logger.set_timestamp_pattern("%H:%M");
    logger.info("second");

    let lines = capture.lines();
    assert_eq!(lines.len(), 2);
    let first = &lines[0].0;
    let second = &lines[1].0;
    assert_eq!(first.len(), 10, "date-only timestamp: {}", first);
    assert!(first.contains('-') && !first.contains(':'));
    assert_eq!(second.len(), 5, "hour-minute timestamp: {}", second);
    assert!(second.contains(':') && !second.contains('-'));
}

#[test]
fn test_async_log_returns_before_the_write_completes() {
    let capture = CaptureWriter::default();
    let logger = Logger::builder()
        .min_level(LogLevel::Info)
        .writer(SlowWriter {
            delay: Duration::from_millis(300),
            inner: capture.clone(),
        })
        .async_mode(true)
        .build();

    let start = Instant::now();
    logger.info("deferred");
    let elapsed = start.elapsed();

    assert!(
        elapsed < Duration::from_millis(100),
        "log blocked for {:?} despite async mode",
        elapsed
    );

    // The write eventually happens on the worker thread.
    let deadline = Instant::now() + Duration::from_secs(2);
    while capture.lines().is_empty() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(10));
    }
    assert_eq!(capture.lines().len(), 1);
}

#[test]
fn test_async_mode_delivers_every_passing_message() {
    let capture = CaptureWriter::default();
    let logger = Logger::builder()
        .min_level(LogLevel::Debug)
        .writer(capture.clone())
        .async_mode(true)
        .build();

    for i in 0..50 {
        logger.info(format!("Message {}", i));
    }

    let deadline = Instant::now() + Duration::from_secs(2);
    while capture.lines().len() < 50 && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(10));
    }
    assert_eq!(capture.lines().len(), 50);
}

#[test]
fn test_file_writer_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("pipeline_test.log");

    let writer = FileWriter::new(&log_file).expect("Failed to create writer");
    let logger = Logger::builder()
        .min_level(LogLevel::Info)
        .formatter(|payload| format!("{} {}", payload.level, payload.message))
        .writer(writer)
        .build();

    logger.info("to disk");
    logger.error("also to disk");
    logger.debug("filtered before the writer");
    drop(logger);

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec!["INFO to disk", "ERROR also to disk"]);
}

#[test]
fn test_failing_writer_does_not_fault_the_caller() {
    struct FailingWriter;

    impl MessageWriter for FailingWriter {
        fn write(&mut self, _text: &str, _level: LogLevel) -> Result<()> {
            Err(logpipe::LoggerError::writer("sink closed"))
        }
    }

    let logger = Logger::builder()
        .min_level(LogLevel::Trace)
        .writer(FailingWriter)
        .build();

    // Reported on stderr; never a panic or an error at the call site.
    logger.error("dropped by the sink");
}

#[test]
fn test_ambient_default_logger() {
    let capture = CaptureWriter::default();
    let logger = logpipe::default_logger();
    logger.set_writer(capture.clone());
    logger.set_formatter(|payload: &FormatterPayload| payload.message.clone());

    // Out of the box the minimum level is Warning.
    logpipe::info("suppressed");
    logpipe::warn("ambient");

    assert_eq!(capture.lines(), vec![("ambient".to_string(), LogLevel::Warning)]);
}
