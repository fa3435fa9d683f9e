//! Log level definitions

use std::fmt;
use std::str::FromStr;

/// Severity tag written into every log line.
///
/// There is no filtering by level: every level is always emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogLevel {
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub const ALL: [LogLevel; 3] = [LogLevel::Info, LogLevel::Warning, LogLevel::Error];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_tags() {
        assert_eq!(LogLevel::Info.to_str(), "INFO");
        assert_eq!(LogLevel::Warning.to_str(), "WARNING");
        assert_eq!(LogLevel::Error.to_str(), "ERROR");
    }

    #[test]
    fn test_parse_accepts_warn_alias() {
        assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!("Warning".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert!("fatal".parse::<LogLevel>().is_err());
    }
}
