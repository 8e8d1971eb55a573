//! Placeholder resolution against a probe result

use super::parser::parse_placeholder;
use super::types::{PathSegment, Placeholder};
use crate::error::{ConditionError, Result};
use crate::types::{ProbeResult, ValueKind};
use serde_json::Value as JsonValue;

/// A placeholder resolved to its runtime value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedValue {
    pub value: String,
    pub kind: ValueKind,
    /// False when the placeholder could not be resolved; comparisons against
    /// such a value always fail
    pub ok: bool,
}

impl ResolvedValue {
    pub fn new(value: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            value: value.into(),
            kind,
            ok: true,
        }
    }

    /// Value of a bare literal, with its kind inferred from the text
    pub fn literal(text: &str) -> Self {
        Self::new(text, ValueKind::infer(text))
    }

    pub fn unresolved() -> Self {
        Self {
            value: String::new(),
            kind: ValueKind::String,
            ok: false,
        }
    }
}

/// Resolve a placeholder token such as `[STATUS]` or `[BODY].users[0].name`.
///
/// Unknown tokens, unparsable bodies, missing keys and out-of-range indices
/// yield an unresolved value.
pub fn resolve(placeholder: &str, result: &ProbeResult) -> ResolvedValue {
    match parse_placeholder(placeholder) {
        Some(parsed) => parsed
            .resolve(placeholder, result)
            .unwrap_or_else(|_| ResolvedValue::unresolved()),
        None => ResolvedValue::unresolved(),
    }
}

impl Placeholder {
    /// Resolve to a stringified value, reporting why resolution failed
    pub(crate) fn resolve(&self, token: &str, result: &ProbeResult) -> Result<ResolvedValue> {
        let resolved = match self {
            Placeholder::Status => ResolvedValue::new(result.http_status.to_string(), ValueKind::Integer),
            Placeholder::Ip => ResolvedValue::new(result.ip.clone(), ValueKind::IPAddress),
            Placeholder::Connected => ResolvedValue::new(result.connected.to_string(), ValueKind::Boolean),
            Placeholder::ResponseTime => {
                ResolvedValue::new(result.duration.as_millis().to_string(), ValueKind::Integer)
            }
            Placeholder::CertificateExpiration => ResolvedValue::new(
                result.certificate_expiration.as_millis().to_string(),
                ValueKind::Duration,
            ),
            Placeholder::DomainExpiration => ResolvedValue::new(
                result.domain_expiration.as_millis().to_string(),
                ValueKind::Duration,
            ),
            Placeholder::DnsRcode => ResolvedValue::new(result.dns_rcode.clone(), ValueKind::String),
            Placeholder::Body(path) if path.is_empty() => resolve_raw_body(&result.body),
            Placeholder::Body(path) => {
                let root = parse_body(token, &result.body)?;
                let value = walk(&root, path).map_err(|reason| ConditionError::resolution(token, reason))?;
                stringify(value)
            }
        };
        Ok(resolved)
    }
}

fn parse_body(token: &str, body: &[u8]) -> Result<JsonValue> {
    serde_json::from_slice(body)
        .map_err(|e| ConditionError::resolution(token, format!("body is not valid JSON: {}", e)))
}

fn resolve_raw_body(body: &[u8]) -> ResolvedValue {
    let text = String::from_utf8_lossy(body).trim().to_string();
    let kind = match serde_json::from_str::<JsonValue>(&text) {
        Ok(value) => stringify(&value).kind,
        Err(_) => ValueKind::String,
    };
    ResolvedValue::new(text, kind)
}

/// Apply path segments left to right
fn walk<'v>(value: &'v JsonValue, path: &[PathSegment]) -> std::result::Result<&'v JsonValue, String> {
    let Some((segment, rest)) = path.split_first() else {
        return Ok(value);
    };
    let next = match segment {
        PathSegment::Key(key) => value
            .as_object()
            .ok_or_else(|| format!("cannot read key '{}' of a non-object value", key))?
            .get(key)
            .ok_or_else(|| format!("key '{}' not found", key))?,
        PathSegment::Index(index) => {
            let items = value
                .as_array()
                .ok_or_else(|| format!("cannot read index {} of a non-array value", index))?;
            items
                .get(*index)
                .ok_or_else(|| format!("index {} out of range (length {})", index, items.len()))?
        }
    };
    walk(next, rest)
}

pub(crate) fn stringify(value: &JsonValue) -> ResolvedValue {
    match value {
        JsonValue::String(s) => ResolvedValue::new(s.clone(), ValueKind::String),
        JsonValue::Number(n) if n.is_f64() => ResolvedValue::new(n.to_string(), ValueKind::Float),
        JsonValue::Number(n) => ResolvedValue::new(n.to_string(), ValueKind::Integer),
        JsonValue::Bool(b) => ResolvedValue::new(b.to_string(), ValueKind::Boolean),
        JsonValue::Null => ResolvedValue::new("null", ValueKind::String),
        JsonValue::Array(_) => ResolvedValue::new(value.to_string(), ValueKind::Array),
        JsonValue::Object(_) => ResolvedValue::new(value.to_string(), ValueKind::String),
    }
}
