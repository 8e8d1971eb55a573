//! SDK error types

use thiserror::Error;
use vigil_core::ConditionError;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Endpoint definition is incomplete
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// A configured condition failed validation
    #[error("Invalid endpoint '{endpoint}': {source}")]
    InvalidCondition {
        endpoint: String,
        #[source]
        source: ConditionError,
    },

    /// YAML error
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
