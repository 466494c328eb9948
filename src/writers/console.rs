//! Console writer implementation

use crate::core::{LogLevel, MessageWriter, Result};
use colored::Colorize;

/// Writes one line per call to standard output, color coding it by level with
/// ANSI escapes when the host supports them.
pub struct ConsoleWriter {
    use_colors: bool,
}

impl ConsoleWriter {
    /// Create a console writer with colors preferred.
    #[must_use]
    pub fn new() -> Self {
        Self::with_colors(true)
    }

    /// Create a console writer with an explicit color preference. Effective
    /// color usage is the preference AND host ANSI support; the combination is
    /// decided here, once, and never re-evaluated per write.
    #[must_use]
    pub fn with_colors(prefer_colors: bool) -> Self {
        Self {
            use_colors: prefer_colors && Self::ansi_supported(),
        }
    }

    /// Windows consoles historically don't interpret ANSI escapes, so color is
    /// forced off there regardless of preference.
    fn ansi_supported() -> bool {
        !cfg!(windows)
    }

    fn stylize(&self, text: &str, level: LogLevel) -> String {
        if self.use_colors {
            text.color(level.color_code()).to_string()
        } else {
            text.to_string()
        }
    }

    #[cfg(test)]
    fn with_detection(prefer_colors: bool, ansi_supported: bool) -> Self {
        Self {
            use_colors: prefer_colors && ansi_supported,
        }
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageWriter for ConsoleWriter {
    fn write(&mut self, text: &str, level: LogLevel) -> Result<()> {
        println!("{}", self.stylize(text, level));
        Ok(())
    }
}
