//! File appender implementation

use crate::core::{Appender, LogRecord, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends records to a text file, one line per record.
///
/// The file is created if absent and existing content is preserved.
pub struct FileAppender {
    writer: BufWriter<File>,
}

impl FileAppender {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::destination_open(path, e))?;

        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Flush buffered bytes and release the file handle
    pub fn close(mut self) -> Result<()> {
        self.flush()
    }
}

impl Appender for FileAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let mut output = record.format_line();
        output.push('\n');

        self.writer
            .write_all(output.as_bytes())
            .map_err(|e| LoggerError::io_operation("writing log file", "cannot append line", e))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| LoggerError::io_operation("flushing log file", "cannot flush", e))?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data reaches the file
        let _ = self.writer.flush();
    }
}
