//! Process-wide logger
//!
//! One [`Logger`] shared by the whole process, for callers that do not want
//! to pass a handle around. It is created on first use with the default
//! stdout console, or installed explicitly with [`install`] before that.

use super::{error::Result, log_level::LogLevel, logger::Logger, sink::ShutdownGuard};
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger
pub fn logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(Logger::new)
}

/// Install `logger` as the process-wide logger.
///
/// Fails, handing the logger back, if the global logger was already created.
pub fn install(logger: Logger) -> std::result::Result<(), Logger> {
    GLOBAL_LOGGER.set(logger)
}

/// Guard closing the global destination on drop; hold it in `main`
pub fn shutdown_guard() -> ShutdownGuard<'static> {
    logger().shutdown_guard()
}

pub fn set_destination(path: impl AsRef<Path>) -> Result<()> {
    logger().set_destination(path)
}

pub fn close_destination() -> bool {
    logger().close_destination()
}

pub fn is_destination_open() -> bool {
    logger().is_destination_open()
}

pub fn log_message(level: LogLevel, origin: &str, template: Option<fmt::Arguments<'_>>) {
    logger().log_message(level, origin, template);
}

pub fn info(origin: &str, args: fmt::Arguments<'_>) {
    logger().info(origin, args);
}

pub fn warning(origin: &str, args: fmt::Arguments<'_>) {
    logger().warning(origin, args);
}

pub fn error(origin: &str, args: fmt::Arguments<'_>) {
    logger().error(origin, args);
}
