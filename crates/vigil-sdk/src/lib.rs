//! Vigil SDK
//!
//! Endpoint-level API on top of the condition engine: endpoint configuration,
//! fail-fast validation at load time and health evaluation of probe results.

pub mod config;
pub mod endpoint;
pub mod error;

// Re-export main types
pub use config::EndpointsConfig;
pub use endpoint::{Endpoint, UiConfig};
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use vigil_core::{Condition, ConditionResult, ProbeResult, SeverityStatus};
