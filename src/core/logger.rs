//! Main logger implementation

use super::{
    appender::Appender,
    config::{LoggerConfig, MIN_MESSAGE_BYTES},
    error::Result,
    log_level::LogLevel,
    log_record::{LogRecord, MAX_MESSAGE_BYTES},
    metrics::LoggerMetrics,
    sink::{LogSink, ShutdownGuard},
};
use crate::appenders::ConsoleAppender;
use parking_lot::Mutex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Writes every record to the console and, when a destination is set, to
/// one append-mode file.
///
/// The console target has its own lock; the file destination shares a
/// single guard between open, close and write.
pub struct Logger {
    console: Mutex<Box<dyn Appender>>,
    sink: LogSink,
    max_message_bytes: usize,
    /// Metrics for observability (lines logged, failures, etc.)
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            console: Mutex::new(Box::new(ConsoleAppender::new())),
            sink: LogSink::new(),
            max_message_bytes: MAX_MESSAGE_BYTES,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Open `path` for appending, closing any previous destination first.
    ///
    /// Failure is reported on stderr and leaves the logger without a file;
    /// logging keeps working on the console. The error is also returned for
    /// callers that want it.
    pub fn set_destination(&self, path: impl AsRef<Path>) -> Result<()> {
        self.sink.open(path.as_ref()).inspect_err(|e| {
            self.metrics.record_open_failure();
            eprintln!("[LOGGER ERROR] {}", e);
        })
    }

    /// Close the file destination. Returns whether a file was actually closed.
    pub fn close_destination(&self) -> bool {
        self.sink.close()
    }

    pub fn is_destination_open(&self) -> bool {
        self.sink.is_open()
    }

    /// Guard that closes the destination when dropped
    pub fn shutdown_guard(&self) -> ShutdownGuard<'_> {
        ShutdownGuard::new(&self.sink)
    }

    pub fn max_message_bytes(&self) -> usize {
        self.max_message_bytes
    }

    /// Render and emit one record.
    ///
    /// `None` stands for a missing template and is logged as `(NULL)`.
    pub fn log_message(&self, level: LogLevel, origin: &str, template: Option<fmt::Arguments<'_>>) {
        let record = LogRecord::new(level, origin, template, self.max_message_bytes);
        self.write(&record);
    }

    pub fn log(&self, level: LogLevel, origin: &str, args: fmt::Arguments<'_>) {
        self.log_message(level, origin, Some(args));
    }

    pub fn info(&self, origin: &str, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, origin, args);
    }

    pub fn warning(&self, origin: &str, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warning, origin, args);
    }

    pub fn error(&self, origin: &str, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, origin, args);
    }

    /// Deliver an already rendered record to the console and the destination.
    ///
    /// Write failures are reported on stderr and counted; they never reach
    /// the caller.
    pub fn write(&self, record: &LogRecord) {
        self.metrics.record_logged();
        if record.truncated {
            self.metrics.record_truncated();
        }

        self.write_console(record);

        match self.sink.write_record(record) {
            Ok(true) => {
                self.metrics.record_file_write();
            }
            Ok(false) => {
                // No destination, console only
            }
            Err(e) => {
                self.metrics.record_write_failure();
                eprintln!("[LOGGER ERROR] File write failed: {}", e);
            }
        }
    }

    /// Console write with panic isolation, so a misbehaving custom console
    /// appender cannot stop the file write.
    fn write_console(&self, record: &LogRecord) {
        let mut console = self.console.lock();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            console.append(record)
        }));

        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                self.metrics.record_write_failure();
                eprintln!("[LOGGER ERROR] Console appender '{}' failed: {}", console.name(), e);
            }
            Err(panic_info) => {
                self.metrics.record_write_failure();
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Console appender '{}' panicked: {}",
                    console.name(),
                    panic_msg
                );
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.console.lock().flush()
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use rust_logkit::Logger;
    ///
    /// let logger = Logger::new();
    /// logger.info("main", format_args!("started"));
    /// assert_eq!(logger.metrics().lines_logged(), 1);
    /// assert_eq!(logger.metrics().file_lines_written(), 0);
    /// ```
    pub fn metrics(&self) -> &Arc<LoggerMetrics> {
        &self.metrics
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let _ = self.console.get_mut().flush();
    }
}

/// Builder for creating a Logger with custom configuration
///
/// # Example
///
/// ```no_run
/// use rust_logkit::{Logger, MemoryAppender};
///
/// let logger = Logger::builder()
///     .console(MemoryAppender::new())
///     .destination("app.log")
///     .max_message_bytes(256)
///     .build();
/// ```
pub struct LoggerBuilder {
    console: Option<Box<dyn Appender>>,
    config: LoggerConfig,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            console: None,
            config: LoggerConfig::default(),
        }
    }

    /// Replace the stdout console target, e.g. to capture output
    #[must_use]
    pub fn console<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.console = Some(Box::new(appender));
        self
    }

    #[must_use]
    pub fn destination(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.destination = Some(path.into());
        self
    }

    #[must_use]
    pub fn max_message_bytes(mut self, bytes: usize) -> Self {
        self.config.max_message_bytes = bytes;
        self
    }

    #[must_use]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    fn assemble(console: Option<Box<dyn Appender>>, max_message_bytes: usize) -> Logger {
        let mut logger = Logger::new();
        if let Some(console) = console {
            logger.console = Mutex::new(console);
        }
        logger.max_message_bytes = max_message_bytes;
        logger
    }

    /// Build the logger.
    ///
    /// A destination that cannot be opened is reported and the logger is
    /// returned without a file. A buffer below the minimum is raised to it.
    pub fn build(self) -> Logger {
        if let Err(e) = self.config.validate() {
            eprintln!("[LOGGER WARNING] {}; using {}", e, MIN_MESSAGE_BYTES);
        }
        let max_message_bytes = self.config.max_message_bytes.max(MIN_MESSAGE_BYTES);
        let logger = Self::assemble(self.console, max_message_bytes);
        if let Some(path) = &self.config.destination {
            let _ = logger.set_destination(path);
        }
        logger
    }

    /// Build the logger, failing on invalid configuration or an unopenable
    /// destination.
    pub fn try_build(self) -> Result<Logger> {
        self.config.validate()?;
        let logger = Self::assemble(self.console, self.config.max_message_bytes);
        if let Some(path) = &self.config.destination {
            logger.set_destination(path)?;
        }
        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
