//! Condition string parser
//!
//! Grammar: `<operand> <operator> <operand>` where the operator is one of
//! `==`, `!=`, `<=`, `>=`, `<`, `>` surrounded by exactly one space on each
//! side. An operand is a placeholder (`[STATUS]`, `[BODY].users[0].id`, ...),
//! a function call (`len(...)`, `has(...)`, `any(...)`, `pat(...)`) or a bare
//! literal (`200`, `UP`, `127.0.0.1`, `48h`).

use super::severity::extract_severity;
use super::types::{Operand, OperandExpr, Operator, ParsedCondition, PathSegment, Placeholder};
use crate::error::{ConditionError, Result};

/// Check a raw condition (optionally severity-prefixed) against the grammar.
///
/// Pure syntax check: nothing is resolved.
pub fn validate(raw: &str) -> Result<()> {
    let (_, text) = extract_severity(raw);
    parse(text)
        .map(|_| ())
        .map_err(|_| ConditionError::InvalidCondition(raw.to_string()))
}

/// Split a condition (without severity prefix) into its operands and operator
pub fn parse(text: &str) -> Result<ParsedCondition<'_>> {
    let invalid = || ConditionError::InvalidCondition(text.to_string());

    let (operator, pos) = Operator::ALL
        .iter()
        .find_map(|op| text.find(op.spaced()).map(|pos| (*op, pos)))
        .ok_or_else(invalid)?;

    let left = &text[..pos];
    let right = &text[pos + operator.spaced().len()..];

    for side in [left, right] {
        if side.is_empty() || side.trim() != side {
            return Err(invalid());
        }
        if Operator::ALL.iter().any(|op| side.contains(op.spaced())) {
            return Err(invalid());
        }
    }

    let left = parse_operand(left).ok_or_else(invalid)?;
    let right = parse_operand(right).ok_or_else(invalid)?;

    if operator.is_ordering() {
        for operand in [&left, &right] {
            if matches!(operand.expr, OperandExpr::Any(_) | OperandExpr::Pattern(_)) {
                return Err(invalid());
            }
        }
    }

    Ok(ParsedCondition {
        left,
        operator,
        right,
    })
}

fn parse_operand(text: &str) -> Option<Operand<'_>> {
    let expr = match split_function_call(text) {
        Some(("len", argument)) => OperandExpr::Len(parse_placeholder(argument)?),
        Some(("has", argument)) => OperandExpr::Has(parse_placeholder(argument)?),
        Some(("any", arguments)) => {
            let options: Vec<String> = arguments
                .split(',')
                .map(|option| option.trim().to_string())
                .collect();
            if options.iter().any(|option| option.is_empty()) {
                return None;
            }
            OperandExpr::Any(options)
        }
        Some(("pat", pattern)) => {
            if pattern.is_empty() {
                return None;
            }
            OperandExpr::Pattern(pattern.to_string())
        }
        _ if text.starts_with('[') => OperandExpr::Placeholder(parse_placeholder(text)?),
        _ => OperandExpr::Literal(text.to_string()),
    };
    Some(Operand { text, expr })
}

/// `name(argument)` -> `(name, argument)`
fn split_function_call(text: &str) -> Option<(&str, &str)> {
    let open = text.find('(')?;
    let argument = text[open + 1..].strip_suffix(')')?;
    Some((&text[..open], argument))
}

/// Parse a placeholder token, including an optional body path
pub fn parse_placeholder(token: &str) -> Option<Placeholder> {
    if let Some(path) = token.strip_prefix(Placeholder::BODY) {
        return parse_body_path(path).map(Placeholder::Body);
    }
    let placeholder = match token {
        Placeholder::STATUS => Placeholder::Status,
        Placeholder::IP => Placeholder::Ip,
        Placeholder::CONNECTED => Placeholder::Connected,
        Placeholder::RESPONSE_TIME => Placeholder::ResponseTime,
        Placeholder::CERTIFICATE_EXPIRATION => Placeholder::CertificateExpiration,
        Placeholder::DOMAIN_EXPIRATION => Placeholder::DomainExpiration,
        Placeholder::DNS_RCODE => Placeholder::DnsRcode,
        _ => return None,
    };
    Some(placeholder)
}

/// Parse `.key` and `[index]` segments
fn parse_body_path(mut path: &str) -> Option<Vec<PathSegment>> {
    let mut segments = Vec::new();
    while !path.is_empty() {
        if let Some(rest) = path.strip_prefix('.') {
            let end = rest.find(&['.', '['][..]).unwrap_or(rest.len());
            let key = &rest[..end];
            if key.is_empty() || key.contains(&[']', ' ', '\t'][..]) {
                return None;
            }
            segments.push(PathSegment::Key(key.to_string()));
            path = &rest[end..];
        } else if let Some(rest) = path.strip_prefix('[') {
            let end = rest.find(']')?;
            let index = rest[..end].parse::<usize>().ok()?;
            segments.push(PathSegment::Index(index));
            path = &rest[end + 1..];
        } else {
            return None;
        }
    }
    Some(segments)
}
