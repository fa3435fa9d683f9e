//! Console appender implementation

use crate::core::{Appender, LogRecord, Result};
use std::io::{self, Write};

/// Writes every record to standard output as one uncoloured line.
///
/// Lines from different threads may interleave, but each line is written
/// with a single `write_all` on the locked handle and is never split.
#[derive(Debug, Default)]
pub struct ConsoleAppender;

impl ConsoleAppender {
    pub fn new() -> Self {
        Self
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let mut line = record.format_line();
        line.push('\n');

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(line.as_bytes())?;
        handle.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
