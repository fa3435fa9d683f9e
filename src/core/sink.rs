//! Log destination state
//!
//! A [`LogSink`] holds at most one open file. Opening, closing and every
//! file write go through the same mutex, so a close can never race with an
//! in-flight write and concurrent open/close calls serialize cleanly.

use super::{appender::Appender, error::Result, log_record::LogRecord};
use crate::appenders::FileAppender;
use parking_lot::Mutex;
use std::path::Path;

#[derive(Default)]
pub struct LogSink {
    file: Mutex<Option<FileAppender>>,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the destination with `path`, opened for appending.
    ///
    /// Any previously open file is closed first, so on failure the sink is
    /// left closed.
    pub fn open(&self, path: &Path) -> Result<()> {
        let mut file = self.file.lock();
        if let Some(previous) = file.take() {
            if let Err(e) = previous.close() {
                eprintln!("[LOGGER WARNING] Closing previous log file failed: {}", e);
            }
        }

        *file = Some(FileAppender::open(path)?);
        Ok(())
    }

    /// Close the destination if one is open.
    ///
    /// Returns `true` only for the call that actually released the file.
    pub fn close(&self) -> bool {
        let mut file = self.file.lock();
        let Some(previous) = file.take() else {
            return false;
        };
        if let Err(e) = previous.close() {
            eprintln!("[LOGGER WARNING] Closing log file failed: {}", e);
        }
        true
    }

    pub fn is_open(&self) -> bool {
        self.file.lock().is_some()
    }

    /// Append `record` and flush before the guard is released.
    ///
    /// Returns `Ok(false)` without touching anything when no file is open.
    pub fn write_record(&self, record: &LogRecord) -> Result<bool> {
        let mut file = self.file.lock();
        let Some(appender) = file.as_mut() else {
            return Ok(false);
        };
        appender.append(record)?;
        appender.flush()?;
        Ok(true)
    }
}

impl Drop for LogSink {
    fn drop(&mut self) {
        self.close();
    }
}

/// Closes a sink when dropped.
///
/// Hold one at the top of `main` so the destination is released on normal
/// exit. Closing is idempotent, so an earlier explicit close is harmless.
#[must_use = "the destination is closed as soon as the guard is dropped"]
pub struct ShutdownGuard<'a> {
    sink: &'a LogSink,
}

impl<'a> ShutdownGuard<'a> {
    pub(crate) fn new(sink: &'a LogSink) -> Self {
        Self { sink }
    }
}

impl Drop for ShutdownGuard<'_> {
    fn drop(&mut self) {
        self.sink.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, MAX_MESSAGE_BYTES};
    use std::sync::Arc;
    use std::thread;
    use tempfile::TempDir;

    fn record(message: &str) -> LogRecord {
        LogRecord::new(
            LogLevel::Info,
            "sink_test",
            Some(format_args!("{}", message)),
            MAX_MESSAGE_BYTES,
        )
    }

    #[test]
    fn test_closed_sink_skips_writes() {
        let sink = LogSink::new();
        assert!(!sink.is_open());
        assert!(!sink.write_record(&record("dropped")).expect("write"));
    }

    #[test]
    fn test_open_write_close() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("sink.log");

        let sink = LogSink::new();
        sink.open(&path).expect("open");
        assert!(sink.is_open());
        assert!(sink.write_record(&record("visible before close")).expect("write"));

        // Flushed under the guard, so readable before close
        let content = std::fs::read_to_string(&path).expect("read");
        assert!(content.contains("visible before close"));

        assert!(sink.close());
        assert!(!sink.close());
        assert!(!sink.is_open());
    }

    #[test]
    fn test_reopen_replaces_destination() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let first = temp_dir.path().join("first.log");
        let second = temp_dir.path().join("second.log");

        let sink = LogSink::new();
        sink.open(&first).expect("open first");
        sink.write_record(&record("one")).expect("write");
        sink.open(&second).expect("open second");
        sink.write_record(&record("two")).expect("write");
        sink.close();

        let first_content = std::fs::read_to_string(&first).expect("read first");
        let second_content = std::fs::read_to_string(&second).expect("read second");
        assert!(first_content.contains("one") && !first_content.contains("two"));
        assert!(second_content.contains("two") && !second_content.contains("one"));
    }

    #[test]
    fn test_failed_open_leaves_sink_closed() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let good = temp_dir.path().join("good.log");
        let bad = temp_dir.path().join("missing").join("bad.log");

        let sink = LogSink::new();
        sink.open(&good).expect("open");
        assert!(sink.open(&bad).is_err());
        assert!(!sink.is_open());
    }

    #[test]
    fn test_exactly_one_concurrent_close_wins() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("close_race.log");

        let sink = Arc::new(LogSink::new());
        sink.open(&path).expect("open");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || sink.close())
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .filter(|closed| *closed)
            .count();
        assert_eq!(winners, 1);
        assert!(!sink.is_open());
    }

    #[test]
    fn test_shutdown_guard_closes_on_drop() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("guard.log");

        let sink = LogSink::new();
        sink.open(&path).expect("open");
        {
            let _guard = ShutdownGuard::new(&sink);
        }
        assert!(!sink.is_open());

        // Dropping a guard after an explicit close is a no-op
        let guard = ShutdownGuard::new(&sink);
        sink.close();
        drop(guard);
        assert!(!sink.is_open());
    }
}
