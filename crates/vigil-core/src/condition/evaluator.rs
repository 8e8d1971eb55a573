//! Evaluation of a single condition against a probe result

use super::comparator::{compare, Resolved};
use super::function;
use super::parser::parse;
use super::placeholder::ResolvedValue;
use super::render::{render, UNRESOLVED_VALUE};
use super::severity::extract_severity;
use super::types::{Operand, OperandExpr, ParsedCondition};
use crate::error::ConditionError;
use crate::types::{ConditionResult, ProbeResult, SeverityStatus};
use tracing::{debug, warn};

/// Evaluate `raw`, append exactly one `ConditionResult` (and any runtime
/// errors) to `result`, and return whether the condition passed.
pub(crate) fn evaluate_condition(raw: &str, result: &mut ProbeResult, redact: bool) -> bool {
    let (severity, text) = extract_severity(raw);

    let (success, rendered) = match parse(text) {
        Ok(parsed) => evaluate_parsed(&parsed, text, result, redact),
        Err(_) => {
            let error = ConditionError::InvalidCondition(raw.to_string());
            warn!(condition = raw, "{}", error);
            result.add_error(error.to_string());
            (false, text.to_string())
        }
    };

    debug!(condition = text, success, "Condition evaluated");

    let severity_status = if success {
        SeverityStatus::None
    } else {
        severity
    };
    result.add_condition_result(ConditionResult::new(rendered, success, severity_status));
    success
}

fn evaluate_parsed(
    parsed: &ParsedCondition<'_>,
    text: &str,
    result: &mut ProbeResult,
    redact: bool,
) -> (bool, String) {
    let mut errors = Vec::new();
    let left = resolve_operand(&parsed.left, result, &mut errors);
    let right = resolve_operand(&parsed.right, result, &mut errors);

    let success = match compare(&left, &right, parsed.operator) {
        Ok(success) => success,
        Err(error) => {
            errors.push(error);
            false
        }
    };

    for error in errors {
        warn!(condition = text, "{}", error);
        result.add_error(error.to_string());
    }

    let pairs = [
        (parsed.left.text, annotation(&parsed.left, &left)),
        (parsed.right.text, annotation(&parsed.right, &right)),
    ];
    (success, render(text, &pairs, success, redact))
}

fn resolve_operand(operand: &Operand<'_>, result: &ProbeResult, errors: &mut Vec<ConditionError>) -> Resolved {
    let mut degrade = |error: ConditionError| {
        debug!(operand = operand.text, %error, "Operand degraded to unresolved");
        errors.push(error);
        ResolvedValue::unresolved()
    };

    match &operand.expr {
        OperandExpr::Placeholder(placeholder) => Resolved::Value(
            placeholder
                .resolve(operand.text, result)
                .unwrap_or_else(&mut degrade),
        ),
        OperandExpr::Len(placeholder) => Resolved::Value(
            function::len(placeholder, operand.text, result).unwrap_or_else(&mut degrade),
        ),
        OperandExpr::Has(placeholder) => Resolved::Value(function::has(placeholder, operand.text, result)),
        OperandExpr::Any(options) => Resolved::AnyOf(options.clone()),
        OperandExpr::Pattern(pattern) => Resolved::Pattern(pattern.clone()),
        OperandExpr::Literal(text) => Resolved::Value(ResolvedValue::literal(text)),
    }
}

/// Value shown next to an operand when rendering a failure
fn annotation(operand: &Operand<'_>, resolved: &Resolved) -> Option<String> {
    if !operand.is_resolved() {
        return None;
    }
    match resolved {
        Resolved::Value(value) if value.ok => Some(value.value.clone()),
        Resolved::Value(_) => Some(UNRESOLVED_VALUE.to_string()),
        Resolved::AnyOf(_) | Resolved::Pattern(_) => None,
    }
}
