//! Error types for circle-stats

use crate::constants::exit;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for circle-stats operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid configuration: invalid value for option '{key}': {value}")]
    InvalidValue { key: String, value: String },

    #[error("Failed to generate circles: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build an `InvalidValue` error from a key and the offending raw value
    pub fn invalid_value(key: &str, value: impl std::fmt::Display) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    /// Whether this error belongs to the configuration stage
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound(_) | Self::Config(_) | Self::InvalidValue { .. }
        )
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        if self.is_config() {
            exit::CONFIG_ERROR
        } else {
            exit::RUNTIME_ERROR
        }
    }
}

/// Result type alias for circle-stats operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_exit_with_two() {
        assert_eq!(Error::ConfigNotFound(PathBuf::from("x.toml")).exit_code(), 2);
        assert_eq!(Error::Config("bad".to_string()).exit_code(), 2);
        assert_eq!(Error::invalid_value("count", "abc").exit_code(), 2);
    }

    #[test]
    fn test_generation_error_exits_with_one() {
        assert_eq!(Error::Generation("bad".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_invalid_value_message() {
        let err = Error::invalid_value("count", "\"abc\"");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: invalid value for option 'count': \"abc\""
        );
    }
}
