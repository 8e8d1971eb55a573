//! Semantic kinds of resolved operand values

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::time::Duration;

/// Semantic type of a resolved operand.
///
/// Placeholders report the kind of the field they read; bare literals get a
/// kind inferred from their text. The comparator matches on the pair of kinds
/// to pick a coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Integer,
    Float,
    Boolean,
    /// Milliseconds when produced by a placeholder, a unit-suffixed literal otherwise
    Duration,
    IPAddress,
    String,
    Array,
}

impl ValueKind {
    /// Infer the kind of a bare literal
    pub fn infer(text: &str) -> Self {
        if parse_bool(text).is_some() {
            ValueKind::Boolean
        } else if text.parse::<i64>().is_ok() {
            ValueKind::Integer
        } else if parse_number(text).is_some() {
            ValueKind::Float
        } else if text.parse::<IpAddr>().is_ok() {
            ValueKind::IPAddress
        } else if parse_duration_literal(text).is_some() {
            ValueKind::Duration
        } else {
            ValueKind::String
        }
    }

    /// Whether values of this kind can be ordered
    pub fn is_numeric(self) -> bool {
        matches!(self, ValueKind::Integer | ValueKind::Float | ValueKind::Duration)
    }
}

/// Parse a finite number, rejecting `inf`, `NaN` and similar words
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    if text
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Parse a unit-suffixed duration literal such as `48h` or `1h30m`.
///
/// Plain numbers are not duration literals.
pub(crate) fn parse_duration_literal(text: &str) -> Option<Duration> {
    if !text.ends_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    if !text.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    humantime::parse_duration(text).ok()
}
