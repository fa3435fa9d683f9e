//! In-memory appender for capturing console output

use crate::core::{Appender, LogRecord, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects formatted lines in memory.
///
/// Clones share the same buffer, so one clone can be installed as the
/// logger's console target while another is kept to inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every captured line, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|line| line.contains(needle))
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        self.lines.lock().push(record.format_line());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
