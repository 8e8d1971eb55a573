//! Wrapper functions: `len`, `has`, and glob matching for `pat`

use super::placeholder::ResolvedValue;
use super::types::Placeholder;
use crate::error::{ConditionError, Result};
use crate::types::{ProbeResult, ValueKind};
use serde_json::Value as JsonValue;

/// `len(X)`: element count of an array, character count of anything that
/// resolves as text (including stringified JSON objects)
pub(crate) fn len(placeholder: &Placeholder, token: &str, result: &ProbeResult) -> Result<ResolvedValue> {
    let resolved = placeholder.resolve(token, result)?;
    let count = match resolved.kind {
        ValueKind::Array => match serde_json::from_str::<JsonValue>(&resolved.value) {
            Ok(JsonValue::Array(items)) => items.len(),
            _ => return Err(ConditionError::function("len", format!("{} is not a valid array", token))),
        },
        ValueKind::String | ValueKind::IPAddress => resolved.value.chars().count(),
        kind => {
            return Err(ConditionError::function(
                "len",
                format!("{} has kind {:?}", token, kind),
            ))
        }
    };
    Ok(ResolvedValue::new(count.to_string(), ValueKind::Integer))
}

/// `has(X)`: whether the placeholder resolves. Never fails.
pub(crate) fn has(placeholder: &Placeholder, token: &str, result: &ProbeResult) -> ResolvedValue {
    let present = placeholder.resolve(token, result).is_ok();
    ResolvedValue::new(present.to_string(), ValueKind::Boolean)
}

/// Glob match where `*` matches any run of characters and `?` exactly one
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let (mut p, mut t) = (0, 0);
    // Position of the last `*` seen and the text position it was tried at
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pattern.len() && pattern[p] == '*' {
            backtrack = Some((p, t));
            p += 1;
        } else if p < pattern.len() && (pattern[p] == '?' || pattern[p] == text[t]) {
            p += 1;
            t += 1;
        } else if let Some((star, tried)) = backtrack {
            p = star + 1;
            t = tried + 1;
            backtrack = Some((star, tried + 1));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|c| *c == '*')
}
