//! Timestamp generation
//!
//! Formats the current wall-clock time with a configurable strftime pattern.
//! The pattern can be swapped at runtime; concurrent readers observe either the
//! old or the new pattern, never a torn value.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use parking_lot::RwLock;

/// Default timestamp pattern, `2024-01-01 00:00:00` style.
pub const DEFAULT_TIMESTAMP_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

pub struct TimestampGenerator {
    pattern: RwLock<String>,
}

impl TimestampGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_pattern(DEFAULT_TIMESTAMP_PATTERN)
    }

    #[must_use]
    pub fn with_pattern(pattern: impl Into<String>) -> Self {
        Self {
            pattern: RwLock::new(pattern.into()),
        }
    }

    /// Current pattern string.
    pub fn pattern(&self) -> String {
        self.pattern.read().clone()
    }

    /// Replace the pattern. Takes effect for subsequent `generate` calls only.
    pub fn set_pattern(&self, pattern: impl Into<String>) {
        *self.pattern.write() = pattern.into();
    }

    /// Format the current local time with the configured pattern.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidPattern`] when the pattern contains a
    /// specifier the strftime parser does not recognize.
    pub fn generate(&self) -> Result<String> {
        self.format_datetime(&Local::now())
    }

    /// Format a fixed instant with the configured pattern.
    pub fn format_datetime(&self, datetime: &DateTime<Local>) -> Result<String> {
        let pattern = self.pattern.read().clone();
        // Parse the pattern up front: formatting an Item::Error through Display
        // would abort with a panic instead of a recoverable error.
        let items: Vec<Item> = StrftimeItems::new(&pattern).collect();
        if items.contains(&Item::Error) {
            return Err(LoggerError::pattern(pattern));
        }
        Ok(datetime.format_with_items(items.into_iter()).to_string())
    }
}

impl Default for TimestampGenerator {
    fn default() -> Self {
        Self::new()
    }
}
