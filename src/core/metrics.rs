//! Logger metrics for observability
//!
//! Counters for monitoring logger health: how many lines were emitted, how
//! many reached the file, and how many writes or opens failed.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use rust_logkit::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_logged();
/// metrics.record_file_write();
///
/// assert_eq!(metrics.lines_logged(), 1);
/// assert_eq!(metrics.file_lines_written(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Every record rendered, whether or not a file was open
    lines_logged: AtomicU64,

    /// Records that reached the file destination
    file_lines_written: AtomicU64,

    /// Console or file writes that returned an error
    write_failures: AtomicU64,

    /// Records whose body was cut at the buffer bound
    truncated_messages: AtomicU64,

    /// Failed attempts to open a destination
    destination_open_failures: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            lines_logged: AtomicU64::new(0),
            file_lines_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            truncated_messages: AtomicU64::new(0),
            destination_open_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_logged(&self) -> u64 {
        self.lines_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_lines_written(&self) -> u64 {
        self.file_lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn truncated_messages(&self) -> u64 {
        self.truncated_messages.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn destination_open_failures(&self) -> u64 {
        self.destination_open_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_logged(&self) -> u64 {
        self.lines_logged.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_write(&self) -> u64 {
        self.file_lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_truncated(&self) -> u64 {
        self.truncated_messages.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_open_failure(&self) -> u64 {
        self.destination_open_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.lines_logged.store(0, Ordering::Relaxed);
        self.file_lines_written.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.truncated_messages.store(0, Ordering::Relaxed);
        self.destination_open_failures.store(0, Ordering::Relaxed);
    }
}
