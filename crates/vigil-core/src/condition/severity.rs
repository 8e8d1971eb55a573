//! Severity prefix extraction (`Low :: `, `Medium :: `, `High :: `, `Critical :: `)

use crate::types::SeverityStatus;

const SEPARATOR: &str = " :: ";

/// Strip a recognized severity prefix from a condition.
///
/// Returns `Critical` and the untouched text when no prefix matches. Prefixes
/// are case-sensitive; anything else stays part of the condition body.
pub fn extract_severity(raw: &str) -> (SeverityStatus, &str) {
    SeverityStatus::PREFIXES
        .iter()
        .find_map(|(prefix, severity)| {
            raw.strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix(SEPARATOR))
                .map(|rest| (*severity, rest))
        })
        .unwrap_or((SeverityStatus::Critical, raw))
}
