//! # Rust Logkit
//!
//! A small thread-safe logger and a minimal test harness.
//!
//! ## Features
//!
//! - **Dual Target**: every line goes to the console, and to one append-mode
//!   file when a destination is set
//! - **Fixed Line Format**: `[YYYY-MM-DD HH:MM:SS] [LEVEL] [origin] message`
//! - **Bounded Messages**: bodies are rendered into a fixed-size buffer and
//!   truncated, never grown
//! - **Thread Safe**: opening, closing and file writes share one guard
//! - **Test Harness**: printing assertions with pass/fail accounting
//!
//! ```no_run
//! use rust_logkit::{global, info};
//!
//! let _guard = global::shutdown_guard();
//! let _ = global::set_destination("app.log");
//! info!(global::logger(), "main", "hello {}", 5);
//! ```

pub mod appenders;
pub mod core;
pub mod harness;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender};
    pub use crate::core::{
        Appender, LogLevel, LogRecord, LogSink, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, Result, ShutdownGuard, MAX_MESSAGE_BYTES,
    };
    pub use crate::harness::{Harness, Summary};
}

pub use crate::core::global;
pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender};
pub use crate::core::{
    Appender, LogLevel, LogRecord, LogSink, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, Result, ShutdownGuard, MAX_MESSAGE_BYTES, MISSING_TEMPLATE,
};
pub use crate::harness::{Harness, Summary};
