//! Condition Evaluation Module
//!
//! A condition is a pass/fail rule written as a small expression over the
//! fields of a probe result:
//!
//! ```text
//! [STATUS] == 200
//! [BODY].data.name == john
//! len([BODY].users) == 100
//! has([BODY].errors) == false
//! [STATUS] == any(200, 201, 204)
//! [BODY].name == pat(john*)
//! [CERTIFICATE_EXPIRATION] > 48h
//! High :: [RESPONSE_TIME] < 500
//! ```
//!
//! ## Placeholders
//! - `[STATUS]`, `[IP]`, `[CONNECTED]`, `[RESPONSE_TIME]` (milliseconds)
//! - `[CERTIFICATE_EXPIRATION]`, `[DOMAIN_EXPIRATION]` (durations)
//! - `[DNS_RCODE]`
//! - `[BODY]` with an optional `.key` / `[index]` path
//!
//! ## Severity
//! An optional `Low :: `, `Medium :: `, `High :: ` or `Critical :: ` prefix sets
//! the severity reported when the condition fails (default `Critical`).
//!
//! Conditions are kept as strings; they are parsed again on every evaluation.

mod comparator;
mod evaluator;
mod function;
mod parser;
mod placeholder;
mod render;
mod severity;
mod types;

pub use comparator::{compare, compare_values, Resolved};
pub use function::glob_match;
pub use parser::{parse, parse_placeholder, validate};
pub use placeholder::{resolve, ResolvedValue};
pub use render::{render, UNRESOLVED_VALUE};
pub use severity::extract_severity;
pub use types::{Operand, OperandExpr, Operator, ParsedCondition, PathSegment, Placeholder};

use crate::error::Result;
use crate::types::{ProbeResult, SeverityStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pass/fail rule, kept in its textual form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Condition(String);

impl Condition {
    pub fn new(condition: impl Into<String>) -> Self {
        Self(condition.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Syntax check, meant to run once when the configuration is loaded.
    ///
    /// The error reproduces the condition text verbatim.
    pub fn validate(&self) -> Result<()> {
        validate(&self.0)
    }

    /// Severity reported on failure and the condition text without its prefix
    pub fn severity(&self) -> (SeverityStatus, &str) {
        extract_severity(&self.0)
    }

    /// Evaluate against `result`, appending one `ConditionResult`.
    ///
    /// Runtime problems (unresolvable placeholders, misused functions, type
    /// mismatches) fail the condition and are appended to `result.errors`.
    /// When `dont_resolve_failed_conditions` is set, failed conditions are
    /// rendered without their resolved values.
    pub fn evaluate(&self, result: &mut ProbeResult, dont_resolve_failed_conditions: bool) -> bool {
        evaluator::evaluate_condition(&self.0, result, dont_resolve_failed_conditions)
    }

    pub fn has_body_placeholder(&self) -> bool {
        self.0.contains(Placeholder::BODY)
    }

    pub fn has_ip_placeholder(&self) -> bool {
        self.0.contains(Placeholder::IP)
    }

    pub fn has_domain_expiration_placeholder(&self) -> bool {
        self.0.contains(Placeholder::DOMAIN_EXPIRATION)
    }

    pub fn has_certificate_expiration_placeholder(&self) -> bool {
        self.0.contains(Placeholder::CERTIFICATE_EXPIRATION)
    }
}

impl From<&str> for Condition {
    fn from(condition: &str) -> Self {
        Self::new(condition)
    }
}

impl From<String> for Condition {
    fn from(condition: String) -> Self {
        Self(condition)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
