//! Typed comparison of resolved operands
//!
//! Coercion order for a pair of values:
//! 1. durations, when either side is a duration (milliseconds) or a duration literal
//! 2. numbers, when both sides parse as numbers
//! 3. booleans, when either side is a boolean
//! 4. IP addresses, when either side is an IP address and both parse
//! 5. exact string equality

use super::function::glob_match;
use super::placeholder::ResolvedValue;
use super::types::Operator;
use crate::error::{ConditionError, Result};
use crate::types::value_kind::{parse_bool, parse_duration_literal, parse_number};
use crate::types::ValueKind;
use std::cmp::Ordering;
use std::net::IpAddr;

/// Operand ready for comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Value(ResolvedValue),
    /// Options listed in `any(...)`
    AnyOf(Vec<String>),
    /// Glob passed to `pat(...)`
    Pattern(String),
}

/// Compare two operands.
///
/// An unresolved value never satisfies any operator. Ordering operators on
/// operands without a numeric interpretation are a `TypeMismatch`.
pub fn compare(left: &Resolved, right: &Resolved, operator: Operator) -> Result<bool> {
    match operator {
        Operator::Eq => Ok(equality(left, right).unwrap_or(false)),
        Operator::Ne => Ok(equality(left, right).map(|eq| !eq).unwrap_or(false)),
        _ => match (left, right) {
            (Resolved::Value(l), Resolved::Value(r)) => compare_values(l, r, operator),
            _ => Err(ConditionError::TypeMismatch(format!(
                "{} is not supported with any() or pat()",
                operator
            ))),
        },
    }
}

/// Compare two plain values
pub fn compare_values(left: &ResolvedValue, right: &ResolvedValue, operator: Operator) -> Result<bool> {
    if !left.ok || !right.ok {
        return Ok(false);
    }
    match operator {
        Operator::Eq => Ok(values_equal(left, right)),
        Operator::Ne => Ok(!values_equal(left, right)),
        _ => {
            let ordering = numeric_ordering(left, right).ok_or_else(|| {
                ConditionError::TypeMismatch(format!(
                    "cannot apply {} to {:?} and {:?} operands",
                    operator, left.kind, right.kind
                ))
            })?;
            Ok(satisfies(operator, ordering))
        }
    }
}

fn satisfies(operator: Operator, ordering: Ordering) -> bool {
    match operator {
        Operator::Eq => ordering == Ordering::Equal,
        Operator::Ne => ordering != Ordering::Equal,
        Operator::Lt => ordering == Ordering::Less,
        Operator::Le => ordering != Ordering::Greater,
        Operator::Gt => ordering == Ordering::Greater,
        Operator::Ge => ordering != Ordering::Less,
    }
}

/// `None` when either side is unresolved
fn equality(left: &Resolved, right: &Resolved) -> Option<bool> {
    let eq = match (left, right) {
        (Resolved::Value(l), Resolved::Value(r)) => {
            if !l.ok || !r.ok {
                return None;
            }
            values_equal(l, r)
        }
        (Resolved::Pattern(p), Resolved::Value(v)) | (Resolved::Value(v), Resolved::Pattern(p)) => {
            if !v.ok {
                return None;
            }
            glob_match(p, &v.value)
        }
        (Resolved::AnyOf(options), Resolved::Value(v)) | (Resolved::Value(v), Resolved::AnyOf(options)) => {
            if !v.ok {
                return None;
            }
            options
                .iter()
                .any(|option| values_equal(v, &ResolvedValue::literal(option)))
        }
        (Resolved::AnyOf(options), Resolved::Pattern(p)) | (Resolved::Pattern(p), Resolved::AnyOf(options)) => {
            options.iter().any(|option| glob_match(p, option))
        }
        (Resolved::Pattern(a), Resolved::Pattern(b)) => a == b,
        (Resolved::AnyOf(a), Resolved::AnyOf(b)) => a == b,
    };
    Some(eq)
}

fn values_equal(left: &ResolvedValue, right: &ResolvedValue) -> bool {
    if let Some(ordering) = numeric_ordering(left, right) {
        return ordering == Ordering::Equal;
    }
    if left.kind == ValueKind::Boolean || right.kind == ValueKind::Boolean {
        if let (Some(l), Some(r)) = (parse_bool(&left.value), parse_bool(&right.value)) {
            return l == r;
        }
    }
    if left.kind == ValueKind::IPAddress || right.kind == ValueKind::IPAddress {
        if let (Ok(l), Ok(r)) = (left.value.parse::<IpAddr>(), right.value.parse::<IpAddr>()) {
            return l == r;
        }
    }
    left.value == right.value
}

fn involves_duration(value: &ResolvedValue) -> bool {
    value.kind == ValueKind::Duration || parse_duration_literal(&value.value).is_some()
}

/// Milliseconds: duration literals are converted, plain numbers are taken as-is
fn to_millis(value: &ResolvedValue) -> Option<f64> {
    match parse_duration_literal(&value.value) {
        Some(duration) => Some(duration.as_secs_f64() * 1000.0),
        None => parse_number(&value.value),
    }
}

/// Numeric ordering of two values, `None` when either side is not numeric
fn numeric_ordering(left: &ResolvedValue, right: &ResolvedValue) -> Option<Ordering> {
    if involves_duration(left) || involves_duration(right) {
        return to_millis(left)?.partial_cmp(&to_millis(right)?);
    }
    if let (Ok(l), Ok(r)) = (left.value.parse::<i64>(), right.value.parse::<i64>()) {
        return Some(l.cmp(&r));
    }
    parse_number(&left.value)?.partial_cmp(&parse_number(&right.value)?)
}
