//! Logging macros for ergonomic log message formatting.
//!
//! Each macro takes a logger, an origin label and an optional `format!`-style
//! template. Leaving the template out, or passing the empty literal `""`,
//! logs the `(NULL)` placeholder.
//!
//! # Examples
//!
//! ```
//! use rust_logkit::prelude::*;
//! use rust_logkit::{info, origin};
//!
//! let logger = Logger::new();
//!
//! info!(logger, "main", "Server started");
//!
//! let port = 8080;
//! info!(logger, origin!(), "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_logkit::prelude::*;
/// # let logger = Logger::new();
/// use rust_logkit::log;
/// log!(logger, LogLevel::Info, "main", "Simple message");
/// log!(logger, LogLevel::Error, "main", "Error code: {}", 500);
/// log!(logger, LogLevel::Warning, "main");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $origin:expr, "" $(,)?) => {
        $logger.log_message($level, $origin, ::std::option::Option::None)
    };
    ($logger:expr, $level:expr, $origin:expr, $($arg:tt)+) => {
        $logger.log_message($level, $origin, ::std::option::Option::Some(::std::format_args!($($arg)+)))
    };
    ($logger:expr, $level:expr, $origin:expr $(,)?) => {
        $logger.log_message($level, $origin, ::std::option::Option::None)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_logkit::prelude::*;
/// # let logger = Logger::new();
/// use rust_logkit::info;
/// info!(logger, "startup", "Application started");
/// info!(logger, "worker", "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $origin:expr $(, $($arg:tt)+)?) => {
        $crate::log!($logger, $crate::LogLevel::Info, $origin $(, $($arg)+)?)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_logkit::prelude::*;
/// # let logger = Logger::new();
/// use rust_logkit::warning;
/// warning!(logger, "disk", "Low disk space");
/// warning!(logger, "client", "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $origin:expr $(, $($arg:tt)+)?) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $origin $(, $($arg)+)?)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_logkit::prelude::*;
/// # let logger = Logger::new();
/// use rust_logkit::error;
/// error!(logger, "db", "Failed to connect to database");
/// error!(logger, "http", "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $origin:expr $(, $($arg:tt)+)?) => {
        $crate::log!($logger, $crate::LogLevel::Error, $origin $(, $($arg)+)?)
    };
}

/// Name of the enclosing function, for use as an origin label.
///
/// Closures report the function they are defined in.
///
/// ```
/// fn load_config() -> &'static str {
///     rust_logkit::origin!()
/// }
/// assert_eq!(load_config(), "load_config");
/// ```
#[macro_export]
macro_rules! origin {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        match name.rfind("::") {
            ::std::option::Option::Some(pos) => &name[pos + 2..],
            ::std::option::Option::None => name,
        }
    }};
}
