//! Formatter payload and formatter function type

use super::log_level::LogLevel;
use std::cell::RefCell;
use std::sync::Arc;

/// User-pluggable formatting function, applied to each payload to produce the
/// final output line.
pub type Formatter = Arc<dyn Fn(&FormatterPayload) -> String + Send + Sync>;

/// Everything the formatter gets to see for one log call. Built fresh per call
/// and discarded once the output line exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterPayload {
    pub timestamp: String,
    pub context_name: String,
    pub level: LogLevel,
    pub message: String,
}

impl FormatterPayload {
    pub fn new(
        timestamp: impl Into<String>,
        context_name: impl Into<String>,
        level: LogLevel,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            context_name: context_name.into(),
            level,
            message: message.into(),
        }
    }
}

/// The out-of-the-box formatter: `<timestamp> [<context>] <LEVEL>: <message>`.
pub fn default_formatter() -> Formatter {
    Arc::new(|payload: &FormatterPayload| {
        format!(
            "{} [{}] {}: {}",
            payload.timestamp, payload.context_name, payload.level, payload.message
        )
    })
}

// Cached per thread: computing the name involves an allocation, and it never
// changes for the lifetime of the thread.
thread_local! {
    static CONTEXT_NAME_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Name of the calling execution context: the thread's name when it has one,
/// otherwise its debug-formatted thread id.
pub fn current_context_name() -> String {
    CONTEXT_NAME_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if cache.is_none() {
            let current = std::thread::current();
            let name = match current.name() {
                Some(name) => name.to_string(),
                None => format!("{:?}", current.id()),
            };
            *cache = Some(name);
        }
        cache
            .as_ref()
            .expect("context name cache initialized in previous line")
            .clone()
    })
}
