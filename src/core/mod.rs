//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod global;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod timestamp;

pub use appender::Appender;
pub use config::{LoggerConfig, MIN_MESSAGE_BYTES};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use log_record::{render_body, LogRecord, RenderedBody, MAX_MESSAGE_BYTES, MISSING_TEMPLATE};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use sink::{LogSink, ShutdownGuard};
pub use timestamp::{format_timestamp, TIMESTAMP_FORMAT};
