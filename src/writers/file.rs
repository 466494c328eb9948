//! File writer implementation

use crate::core::{LogLevel, LoggerError, MessageWriter, Result};
use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};

/// Appends one line per call to a file. The file is opened append/create at
/// construction and owned for the writer's lifetime; output is line buffered,
/// so every completed line reaches the OS.
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
    out: LineWriter<File>,
}

impl FileWriter {
    /// Open (or create) the file at `path` for appending.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_writer(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            path,
            out: LineWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MessageWriter for FileWriter {
    fn write(&mut self, text: &str, _level: LogLevel) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }
}
