//! Error types for Vigil Core

use thiserror::Error;

/// Errors raised while validating or evaluating a condition
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConditionError {
    /// The condition text does not match the grammar
    #[error("invalid condition: {0}")]
    InvalidCondition(String),

    /// A placeholder could not be resolved against the probe result
    #[error("failed to resolve {placeholder}: {reason}")]
    Resolution { placeholder: String, reason: String },

    /// A wrapper function was applied to a value it cannot handle
    #[error("invalid use of {function}(): {reason}")]
    InvalidFunction { function: String, reason: String },

    /// Operands cannot be compared with the requested operator
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// Integer code outside the stored severity range
    #[error("unknown severity code: {0}")]
    UnknownSeverity(i64),
}

impl ConditionError {
    pub(crate) fn resolution(placeholder: &str, reason: impl Into<String>) -> Self {
        ConditionError::Resolution {
            placeholder: placeholder.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn function(function: &str, reason: impl Into<String>) -> Self {
        ConditionError::InvalidFunction {
            function: function.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConditionError>;
