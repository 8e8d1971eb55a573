//! Severity attached to a failing condition

use crate::error::ConditionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Escalation level of a condition outcome, used downstream for alert routing.
///
/// Variants are ordered so that the highest severity among several failed
/// conditions can be picked with `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum SeverityStatus {
    /// No severity applies (condition passed)
    #[default]
    None,
    Low,
    Medium,
    High,
    /// Grammar default when no prefix is given
    Critical,
}

impl SeverityStatus {
    /// Recognized condition prefixes, checked in order
    pub(crate) const PREFIXES: [(&'static str, SeverityStatus); 4] = [
        ("Low", SeverityStatus::Low),
        ("Medium", SeverityStatus::Medium),
        ("High", SeverityStatus::High),
        ("Critical", SeverityStatus::Critical),
    ];

    /// Integer code used by storage layers
    pub fn code(self) -> i64 {
        match self {
            SeverityStatus::None => 0,
            SeverityStatus::Low => 1,
            SeverityStatus::Medium => 2,
            SeverityStatus::High => 3,
            SeverityStatus::Critical => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeverityStatus::None => "None",
            SeverityStatus::Low => "Low",
            SeverityStatus::Medium => "Medium",
            SeverityStatus::High => "High",
            SeverityStatus::Critical => "Critical",
        }
    }
}

impl fmt::Display for SeverityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i64> for SeverityStatus {
    type Error = ConditionError;

    fn try_from(code: i64) -> std::result::Result<Self, Self::Error> {
        match code {
            0 => Ok(SeverityStatus::None),
            1 => Ok(SeverityStatus::Low),
            2 => Ok(SeverityStatus::Medium),
            3 => Ok(SeverityStatus::High),
            4 => Ok(SeverityStatus::Critical),
            other => Err(ConditionError::UnknownSeverity(other)),
        }
    }
}
