//! Core error types for daterange-core.
//!
//! Gap extraction itself never fails; these errors come from the opt-in
//! validation layer and from loading extractor configuration.

use thiserror::Error;

/// Core error type for daterange-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Failed to serialize configuration
    #[error("Failed to serialize configuration: {0}")]
    SerializeFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Interval whose start lies after its end
    #[error("Invalid {role} interval: start ({start}) is after end ({end})")]
    InvalidInterval {
        role: String,
        start: String,
        end: String,
    },
}

impl ValidationError {
    pub(crate) fn invalid_interval<T: std::fmt::Debug>(
        role: impl Into<String>,
        start: T,
        end: T,
    ) -> Self {
        ValidationError::InvalidInterval {
            role: role.into(),
            start: format!("{start:?}"),
            end: format!("{end:?}"),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::SerializeFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
