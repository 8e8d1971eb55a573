//! Vigil Core - Condition evaluation engine for Vigil health checks
//!
//! This crate provides:
//! - The probe result data model (`ProbeResult`, `ConditionResult`, `SeverityStatus`)
//! - The `Condition` mini-language: validation, placeholder resolution,
//!   wrapper functions, typed comparison and rendering
//! - Error types

pub mod condition;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use condition::Condition;
pub use error::{ConditionError, Result};
pub use types::{ConditionResult, ProbeResult, SeverityStatus, ValueKind};
