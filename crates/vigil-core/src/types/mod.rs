//! Data model shared by the engine and its collaborators
//!
//! - Probe results and condition outcomes
//! - Severity levels
//! - Value kinds for resolved operands

pub mod result;
pub mod severity;
pub mod value_kind;

pub use result::{ConditionResult, ProbeResult};
pub use severity::SeverityStatus;
pub use value_kind::ValueKind;
