//! Display form of a condition outcome

/// Shown in place of a value that could not be resolved
pub const UNRESOLVED_VALUE: &str = "INVALID";

/// Render a condition for display.
///
/// Passing conditions, and any condition when `redact` is set, come back
/// unchanged. Otherwise each operand listed in `resolved_pairs` with a value
/// gets ` (<value>)` appended right after it. Pairs are matched left to right;
/// an operand paired with `None` is only skipped over.
pub fn render(
    condition_text: &str,
    resolved_pairs: &[(&str, Option<String>)],
    success: bool,
    redact: bool,
) -> String {
    if success || redact {
        return condition_text.to_string();
    }

    let mut rendered = String::with_capacity(condition_text.len() + 16);
    let mut cursor = 0;
    for (token, value) in resolved_pairs {
        let Some(offset) = condition_text[cursor..].find(token) else {
            continue;
        };
        let end = cursor + offset + token.len();
        rendered.push_str(&condition_text[cursor..end]);
        if let Some(value) = value {
            rendered.push_str(" (");
            rendered.push_str(value);
            rendered.push(')');
        }
        cursor = end;
    }
    rendered.push_str(&condition_text[cursor..]);
    rendered
}
