//! Error types for the logger system

use std::path::Path;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The log destination could not be opened for appending
    #[error("Cannot open log file '{path}': {source}")]
    DestinationOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create a destination open error for `path`
    pub fn destination_open(path: &Path, source: std::io::Error) -> Self {
        LoggerError::DestinationOpen {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("LoggerConfig", "max_message_bytes too small");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = LoggerError::destination_open(Path::new("missing/dir/x.txt"), io_err);
        assert!(matches!(err, LoggerError::DestinationOpen { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("LoggerConfig", "max_message_bytes must be at least 2");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LoggerConfig: max_message_bytes must be at least 2"
        );

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = LoggerError::destination_open(Path::new("missing/dir/x.txt"), io_err);
        assert_eq!(
            err.to_string(),
            "Cannot open log file 'missing/dir/x.txt': no such directory"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("writing log file", "cannot write to file", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("writing log file"));
        assert!(err.to_string().contains("cannot write to file"));
    }
}
